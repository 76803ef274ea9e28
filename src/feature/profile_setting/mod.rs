mod action;
mod reducer;
mod state;

pub use action::ProfileSettingAction;
pub use reducer::ProfileSettingReducer;
pub use state::ProfileSettingState;
