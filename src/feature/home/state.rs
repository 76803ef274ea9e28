use crate::feature::bottom_sheet::BottomSheetState;
use crate::feature::feed::FeedItemState;
use crate::feature::profile_setting::ProfileSettingState;
use crate::feature::setting::SettingState;
use crate::model::ToastState;
use crate::store::{FeatureState, IdentifiedList};

/// Screens reachable from home via the navigation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeScene {
    Setting,
    OpenSourceLicense,
    ModifyProfile,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeState {
    /// Pushed scenes; empty means the feed is frontmost.
    pub path: Vec<HomeScene>,
    pub toast: ToastState,
    pub is_loading: bool,
    pub is_bottom_sheet_presented: bool,
    pub feeds: IdentifiedList<FeedItemState>,
    pub setting: Option<SettingState>,
    pub bottom_sheet: Option<BottomSheetState>,
    pub profile_setting: Option<ProfileSettingState>,
    /// At most one card plays audio at a time.
    pub audio_playing_feed: Option<u64>,
}

impl FeatureState for HomeState {}
