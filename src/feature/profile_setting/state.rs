use crate::model::{Profile, ToastState};
use crate::store::FeatureState;
use crate::validation::FieldValidation;

/// Profile setup / modification form.
///
/// Serves both sign-up (nickname → archive → picture, advancing per step)
/// and profile editing (all fields at once, back-confirmation on unsaved
/// changes).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileSettingState {
    pub toast: ToastState,

    /// Identifier handed over from the auth flow, submitted with sign-up.
    pub user_id: String,

    pub nickname: String,
    pub nickname_validation: FieldValidation,
    pub can_advance_nickname: bool,

    pub archive_name: String,
    pub archive_validation: FieldValidation,
    pub can_advance_archive: bool,

    pub is_image_picker_presented: bool,
    pub selected_image: Option<Vec<u8>>,
    pub uploaded_image_url: Option<String>,
    pub can_advance_image: bool,

    /// Any field changed since the screen appeared (drives the
    /// back-confirmation popup in edit mode).
    pub has_changes: bool,
    pub is_back_popup_presented: bool,
}

impl ProfileSettingState {
    /// Empty form for sign-up.
    pub fn for_sign_up(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    /// Form prefilled from an existing profile for editing.
    pub fn for_edit(profile: &Profile) -> Self {
        Self {
            user_id: profile.id.clone(),
            nickname: profile.nickname.clone(),
            archive_name: profile.archive_name.clone(),
            uploaded_image_url: Some(profile.profile_image_url.clone()),
            ..Self::default()
        }
    }
}

impl FeatureState for ProfileSettingState {}
