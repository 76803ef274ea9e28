use crate::net::feed::PostItem;
use crate::store::FeatureState;

/// Post composer presented from the tab bar's upload button.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadState {
    /// Finished pages, in order. Each page is an uploaded image plus its
    /// caption.
    pub items: Vec<PostItem>,
    pub is_uploading_image: bool,
    pub is_submitting: bool,
}

impl UploadState {
    pub fn can_submit(&self) -> bool {
        !self.items.is_empty() && !self.is_submitting && !self.is_uploading_image
    }
}

impl FeatureState for UploadState {}
