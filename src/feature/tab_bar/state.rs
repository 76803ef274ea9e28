use crate::feature::home::HomeState;
use crate::feature::upload::UploadState;
use crate::model::{Profile, ToastState};
use crate::store::FeatureState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Archive,
}

/// Root screen: the tab chrome plus its child screens.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabBarState {
    pub selected: Tab,
    pub my_profile: Option<Profile>,
    pub toast: ToastState,
    pub is_upload_presented: bool,
    pub upload: Option<UploadState>,
    pub home: HomeState,
}

impl FeatureState for TabBarState {}
