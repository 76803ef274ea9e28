mod action;
mod reducer;
mod state;

pub use action::HomeAction;
pub use reducer::HomeReducer;
pub use state::{HomeScene, HomeState};
