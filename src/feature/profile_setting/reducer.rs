use crate::model::{deliver_toast, Toast};
use crate::net::image::UploadImageRequest;
use crate::net::profile::{
    ArchiveNameAvailabilityRequest, NicknameAvailabilityRequest, SignUpRequest,
    UpdateProfileRequest,
};
use crate::net::ApiClient;
use crate::store::{none, Effect, Effects, Reducer};
use crate::validation::{classify, Field, FieldValidation};

use super::action::ProfileSettingAction;
use super::state::ProfileSettingState;

pub struct ProfileSettingReducer {
    client: ApiClient,
}

impl ProfileSettingReducer {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn toast_for(err: impl std::fmt::Display) -> Effects<ProfileSettingAction> {
        vec![Effect::send(ProfileSettingAction::ShowToast(Toast::new(
            err.to_string(),
        )))]
    }
}

impl Reducer for ProfileSettingReducer {
    type State = ProfileSettingState;
    type Action = ProfileSettingAction;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) -> Effects<Self::Action> {
        use ProfileSettingAction as A;

        match action {
            A::Appeared => {
                // Edit mode prefills the fields; classify them so the
                // duplicate-check buttons start in the right state.
                state.nickname_validation = classify(Field::Nickname, &state.nickname);
                state.archive_validation = classify(Field::ArchiveName, &state.archive_name);
                none()
            }

            A::ShowToast(toast) => {
                deliver_toast(&mut state.toast, toast, A::ShowToast, A::ToastDismissed)
            }
            A::ToastDismissed => {
                state.toast.visible = false;
                none()
            }

            A::NicknameChanged(nickname) => {
                state.nickname_validation = classify(Field::Nickname, &nickname);
                state.nickname = nickname;
                state.can_advance_nickname = false;
                none()
            }

            A::CheckNicknameAvailability => {
                if state.nickname_validation != FieldValidation::ReadyForDuplicateCheck {
                    return none();
                }
                let client = self.client.clone();
                let nickname = state.nickname.clone();
                vec![Effect::task(async move {
                    A::NicknameAvailabilityChecked(
                        client.send(&NicknameAvailabilityRequest { nickname }).await,
                    )
                })]
            }

            A::NicknameAvailabilityChecked(Ok(dto)) => {
                state.nickname_validation = if dto.available {
                    FieldValidation::Available
                } else {
                    FieldValidation::AlreadyUsed
                };
                state.can_advance_nickname = !state.nickname_validation.blocks_advance();
                state.has_changes = state.has_changes || dto.available;
                none()
            }
            A::NicknameAvailabilityChecked(Err(err)) => Self::toast_for(err),

            A::ArchiveNameChanged(archive_name) => {
                state.archive_validation = classify(Field::ArchiveName, &archive_name);
                state.archive_name = archive_name;
                state.can_advance_archive = false;
                none()
            }

            A::CheckArchiveAvailability => {
                if state.archive_validation != FieldValidation::ReadyForDuplicateCheck {
                    return none();
                }
                let client = self.client.clone();
                let archive_name = state.archive_name.clone();
                vec![Effect::task(async move {
                    A::ArchiveAvailabilityChecked(
                        client
                            .send(&ArchiveNameAvailabilityRequest { archive_name })
                            .await,
                    )
                })]
            }

            A::ArchiveAvailabilityChecked(Ok(dto)) => {
                state.archive_validation = if dto.available {
                    FieldValidation::Available
                } else {
                    FieldValidation::AlreadyUsed
                };
                state.can_advance_archive = !state.archive_validation.blocks_advance();
                state.has_changes = state.has_changes || dto.available;
                none()
            }
            A::ArchiveAvailabilityChecked(Err(err)) => Self::toast_for(err),

            A::ImagePickerTapped => {
                state.is_image_picker_presented = true;
                none()
            }

            A::ImageSelected(bytes) => {
                state.selected_image = Some(bytes);
                state.is_image_picker_presented = false;
                vec![Effect::send(A::UploadImage)]
            }

            A::UploadImage => {
                let Some(bytes) = state.selected_image.clone() else {
                    tracing::error!("upload requested with no image selected");
                    return none();
                };
                let client = self.client.clone();
                vec![Effect::task(async move {
                    A::ImageUploaded(client.send(&UploadImageRequest { bytes }).await)
                })]
            }

            A::ImageUploaded(Ok(dto)) => {
                state.uploaded_image_url = Some(dto.data.link);
                state.can_advance_image = true;
                state.has_changes = true;
                none()
            }
            A::ImageUploaded(Err(err)) => Self::toast_for(err),

            A::SignUpTapped => {
                let Some(profile_image_url) = state.uploaded_image_url.clone() else {
                    tracing::error!("sign-up requested with no profile image");
                    return none();
                };
                let client = self.client.clone();
                let request = SignUpRequest {
                    identifier: state.user_id.clone(),
                    nickname: state.nickname.clone(),
                    archive_name: state.archive_name.clone(),
                    profile_image_url,
                };
                vec![Effect::task(async move {
                    A::SignedUp(client.send(&request).await)
                })]
            }

            A::SignedUp(Ok(_)) => {
                // Parent navigates away; nothing left unsaved here.
                state.has_changes = false;
                none()
            }
            A::SignedUp(Err(err)) => Self::toast_for(err),

            A::SaveChangesTapped => {
                let client = self.client.clone();
                let request = UpdateProfileRequest {
                    nickname: state.nickname.clone(),
                    archive_name: state.archive_name.clone(),
                    profile_image_url: state.uploaded_image_url.clone().unwrap_or_default(),
                };
                vec![Effect::task(async move {
                    A::ChangesSaved(client.send(&request).await)
                })]
            }

            A::ChangesSaved(Ok(_)) => {
                state.has_changes = false;
                none()
            }
            A::ChangesSaved(Err(err)) => Self::toast_for(err),

            A::BackTapped => {
                if state.has_changes {
                    state.is_back_popup_presented = true;
                }
                // Clean form: the parent pops the screen.
                none()
            }

            A::DiscardConfirmed | A::DiscardCancelled => {
                state.is_back_popup_presented = false;
                none()
            }

            // Navigation signals observed by the parent.
            A::NextOnNicknameTapped | A::NextOnArchiveTapped => none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Session};
    use crate::net::profile::AvailabilityDto;
    use crate::net::NetworkError;

    fn reducer() -> ProfileSettingReducer {
        ProfileSettingReducer::new(ApiClient::new(Config::default(), Session::new()).unwrap())
    }

    #[test]
    fn typing_revalidates_and_disables_advance() {
        let mut state = ProfileSettingState::default();
        state.can_advance_nickname = true;

        reducer().reduce(
            &mut state,
            ProfileSettingAction::NicknameChanged("글사진".to_string()),
        );

        assert_eq!(
            state.nickname_validation,
            FieldValidation::ReadyForDuplicateCheck
        );
        assert!(!state.can_advance_nickname);
    }

    #[test]
    fn duplicate_check_requires_ready_state() {
        let mut state = ProfileSettingState::default();
        state.nickname = "bad name!".to_string();
        state.nickname_validation = FieldValidation::DisallowedCharacters;

        let effects = reducer().reduce(&mut state, ProfileSettingAction::CheckNicknameAvailability);
        assert!(effects.is_empty());
    }

    #[test]
    fn available_nickname_enables_next_step() {
        let mut state = ProfileSettingState::default();
        state.nickname = "reader".to_string();
        state.nickname_validation = FieldValidation::ReadyForDuplicateCheck;

        reducer().reduce(
            &mut state,
            ProfileSettingAction::NicknameAvailabilityChecked(Ok(AvailabilityDto {
                available: true,
            })),
        );

        assert_eq!(state.nickname_validation, FieldValidation::Available);
        assert!(state.can_advance_nickname);
        assert!(state.has_changes);
    }

    #[test]
    fn taken_nickname_blocks_next_step() {
        let mut state = ProfileSettingState::default();
        state.nickname_validation = FieldValidation::ReadyForDuplicateCheck;

        reducer().reduce(
            &mut state,
            ProfileSettingAction::NicknameAvailabilityChecked(Ok(AvailabilityDto {
                available: false,
            })),
        );

        assert_eq!(state.nickname_validation, FieldValidation::AlreadyUsed);
        assert!(!state.can_advance_nickname);
    }

    #[test]
    fn network_failure_only_schedules_a_toast() {
        let mut state = ProfileSettingState::default();
        state.nickname = "reader".to_string();
        state.nickname_validation = FieldValidation::ReadyForDuplicateCheck;
        let before = state.clone();

        let effects = reducer().reduce(
            &mut state,
            ProfileSettingAction::NicknameAvailabilityChecked(Err(NetworkError::Timeout {
                duration: 10,
            })),
        );

        // No state corruption: the failure leaves every field untouched.
        assert_eq!(state, before);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn back_with_unsaved_changes_asks_first() {
        let mut state = ProfileSettingState::default();
        state.has_changes = true;

        reducer().reduce(&mut state, ProfileSettingAction::BackTapped);
        assert!(state.is_back_popup_presented);

        reducer().reduce(&mut state, ProfileSettingAction::DiscardConfirmed);
        assert!(!state.is_back_popup_presented);
    }

    #[test]
    fn back_on_clean_form_shows_no_popup() {
        let mut state = ProfileSettingState::default();
        reducer().reduce(&mut state, ProfileSettingAction::BackTapped);
        assert!(!state.is_back_popup_presented);
    }

    #[test]
    fn selecting_an_image_kicks_off_the_upload() {
        let mut state = ProfileSettingState::default();
        state.is_image_picker_presented = true;

        let effects = reducer().reduce(
            &mut state,
            ProfileSettingAction::ImageSelected(vec![1, 2, 3]),
        );

        assert!(!state.is_image_picker_presented);
        assert_eq!(state.selected_image.as_deref(), Some(&[1u8, 2, 3][..]));
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn sign_up_without_image_is_refused() {
        let mut state = ProfileSettingState::for_sign_up("user-1");
        let effects = reducer().reduce(&mut state, ProfileSettingAction::SignUpTapped);
        assert!(effects.is_empty());
    }
}
