use crate::feature::bottom_sheet::BottomSheetAction;
use crate::feature::feed::FeedAction;
use crate::feature::profile_setting::ProfileSettingAction;
use crate::feature::setting::SettingAction;
use crate::model::{Profile, Toast};
use crate::net::feed::{DeletedDto, FeedDto};
use crate::net::NetworkError;
use crate::store::Action;

#[derive(Debug)]
pub enum HomeAction {
    Appeared,
    Refresh,
    FeedsFetched(Result<Vec<FeedDto>, NetworkError>),

    /// Keyed child action for one feed card.
    Feed { id: u64, action: FeedAction },

    /// Navigation signal; the tab bar answers with `ProfileReceived`.
    SettingButtonTapped,
    ProfileReceived(Profile),
    Setting(SettingAction),

    BottomSheet(BottomSheetAction),
    /// Sheet finished its dismiss animation.
    BottomSheetDismissed,
    FeedDeleted(Result<DeletedDto, NetworkError>),

    ProfileSetting(ProfileSettingAction),

    ShowToast(Toast),
    ToastDismissed,
}

impl Action for HomeAction {}
