use crate::model::Feed;
use crate::store::{FeatureState, Identifiable};

/// One card in the home feed list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedItemState {
    pub feed: Feed,
    /// First card gets the welcome treatment in the UI.
    pub is_first: bool,
    pub is_audio_playing: bool,
}

impl FeedItemState {
    pub fn new(feed: Feed, is_first: bool) -> Self {
        Self {
            feed,
            is_first,
            is_audio_playing: false,
        }
    }
}

impl FeatureState for FeedItemState {}

impl Identifiable for FeedItemState {
    type Id = u64;

    fn id(&self) -> u64 {
        self.feed.id
    }
}
