use crate::feature::home::HomeAction;
use crate::feature::upload::UploadAction;
use crate::model::Toast;
use crate::net::profile::ProfileDto;
use crate::net::NetworkError;
use crate::store::Action;

use super::state::Tab;

#[derive(Debug)]
pub enum TabBarAction {
    TabSelected(Tab),
    FetchProfile,
    ProfileFetched(Result<ProfileDto, NetworkError>),

    UploadButtonTapped,
    Upload(UploadAction),

    Home(HomeAction),

    ShowToast(Toast),
    ToastDismissed,
}

impl Action for TabBarAction {}
