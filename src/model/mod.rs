//! Domain entities shared across screens.

mod feed;
mod profile;
mod toast;

pub use feed::{Author, Feed, TextImage};
pub use profile::Profile;
pub use toast::{deliver_toast, Toast, ToastState, TOAST_DISPLAY_MILLIS, TOAST_REQUEUE_MILLIS};
