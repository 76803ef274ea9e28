use crate::model::Feed;
use crate::store::FeatureState;

/// Whose post the sheet was opened for; decides which rows it offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetKind {
    /// Own post: edit and delete.
    #[default]
    Mine,
    /// Someone else's post: report.
    Others,
}

/// Action sheet presented from a feed card's more-button.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BottomSheetState {
    pub feed_id: u64,
    pub feed: Feed,
    pub kind: SheetKind,
}

impl BottomSheetState {
    pub fn new(feed: Feed, kind: SheetKind) -> Self {
        Self {
            feed_id: feed.id,
            feed,
            kind,
        }
    }
}

impl FeatureState for BottomSheetState {}
