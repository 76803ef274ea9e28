use crate::net::feed::{CreatePostRequest, PostItem};
use crate::net::image::UploadImageRequest;
use crate::net::ApiClient;
use crate::store::{none, Effect, Effects, Reducer};

use super::action::UploadAction;
use super::state::UploadState;

pub struct UploadReducer {
    client: ApiClient,
}

impl UploadReducer {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl Reducer for UploadReducer {
    type State = UploadState;
    type Action = UploadAction;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) -> Effects<Self::Action> {
        match action {
            UploadAction::ImageSelected(bytes) => {
                if state.is_uploading_image {
                    return none();
                }
                state.is_uploading_image = true;
                let client = self.client.clone();
                vec![Effect::task(async move {
                    UploadAction::ImageUploaded(client.send(&UploadImageRequest { bytes }).await)
                })]
            }

            UploadAction::ImageUploaded(Ok(dto)) => {
                state.is_uploading_image = false;
                state.items.push(PostItem {
                    image_url: dto.data.link,
                    content: String::new(),
                });
                none()
            }
            // The presenting screen shows the error toast.
            UploadAction::ImageUploaded(Err(_)) => {
                state.is_uploading_image = false;
                none()
            }

            UploadAction::ContentChanged { index, content } => {
                if let Some(item) = state.items.get_mut(index) {
                    item.content = content;
                }
                none()
            }

            UploadAction::ItemRemoved { index } => {
                if index < state.items.len() {
                    state.items.remove(index);
                }
                none()
            }

            UploadAction::SubmitTapped => {
                if !state.can_submit() {
                    return none();
                }
                state.is_submitting = true;
                let client = self.client.clone();
                let request = CreatePostRequest {
                    items: state.items.clone(),
                };
                vec![Effect::task(async move {
                    UploadAction::Submitted(client.send(&request).await)
                })]
            }

            UploadAction::Submitted(Ok(_)) => {
                state.is_submitting = false;
                state.items.clear();
                none()
            }
            UploadAction::Submitted(Err(_)) => {
                state.is_submitting = false;
                none()
            }
        }
    }
}
