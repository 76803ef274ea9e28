//! Client configuration and session credentials.

mod loader;
mod session;
mod types;

pub use loader::ConfigError;
pub use session::Session;
pub use types::{ApiSettings, Config, ImageServiceSettings};
