mod action;
mod reducer;
mod state;

pub use action::UploadAction;
pub use reducer::UploadReducer;
pub use state::UploadState;
