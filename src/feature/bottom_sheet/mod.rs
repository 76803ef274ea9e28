mod action;
mod reducer;
mod state;

pub use action::BottomSheetAction;
pub use reducer::BottomSheetReducer;
pub use state::{BottomSheetState, SheetKind};
