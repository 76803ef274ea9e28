mod action;
mod reducer;
mod state;

pub use action::FeedAction;
pub use reducer::FeedReducer;
pub use state::FeedItemState;
