mod action;
mod reducer;
mod state;

pub use action::TabBarAction;
pub use reducer::TabBarReducer;
pub use state::{Tab, TabBarState};
