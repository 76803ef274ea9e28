use crate::model::Toast;
use crate::net::image::UploadedImageDto;
use crate::net::profile::{AvailabilityDto, ProfileDto};
use crate::net::NetworkError;
use crate::store::Action;

#[derive(Debug)]
pub enum ProfileSettingAction {
    Appeared,

    ShowToast(Toast),
    ToastDismissed,

    NicknameChanged(String),
    CheckNicknameAvailability,
    NicknameAvailabilityChecked(Result<AvailabilityDto, NetworkError>),
    /// Navigation signal for the sign-up flow; observed by the parent.
    NextOnNicknameTapped,

    ArchiveNameChanged(String),
    CheckArchiveAvailability,
    ArchiveAvailabilityChecked(Result<AvailabilityDto, NetworkError>),
    NextOnArchiveTapped,

    ImagePickerTapped,
    ImageSelected(Vec<u8>),
    UploadImage,
    ImageUploaded(Result<UploadedImageDto, NetworkError>),

    SignUpTapped,
    SignedUp(Result<ProfileDto, NetworkError>),

    SaveChangesTapped,
    ChangesSaved(Result<ProfileDto, NetworkError>),

    BackTapped,
    DiscardConfirmed,
    DiscardCancelled,
}

impl Action for ProfileSettingAction {}
