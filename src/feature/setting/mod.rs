//! Settings panel pushed from the home screen.
//!
//! Navigation-only: taps are signals the home reducer turns into path
//! mutations, so there is no reducer of its own.

use crate::model::Profile;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingState {
    pub profile: Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingAction {
    LicenseTapped,
    ProfileManagementTapped,
}
