use std::sync::Arc;

use crate::clipboard::Pasteboard;
use crate::feature::home::{HomeAction, HomeReducer};
use crate::feature::upload::{UploadAction, UploadReducer, UploadState};
use crate::model::{deliver_toast, Toast};
use crate::net::profile::FetchProfileRequest;
use crate::net::ApiClient;
use crate::store::{map_effects, none, Effect, Effects, Reducer};

use super::action::TabBarAction;
use super::state::TabBarState;

const UPLOAD_TOAST_TITLE: &str = "Post uploaded";

pub struct TabBarReducer {
    client: ApiClient,
    home: HomeReducer,
    upload: UploadReducer,
}

impl TabBarReducer {
    pub fn new(client: ApiClient, pasteboard: Arc<dyn Pasteboard>) -> Self {
        Self {
            home: HomeReducer::new(client.clone(), pasteboard),
            upload: UploadReducer::new(client.clone()),
            client,
        }
    }

    fn toast_for(err: String) -> Effect<TabBarAction> {
        Effect::send(TabBarAction::ShowToast(Toast::new(err)))
    }
}

impl Reducer for TabBarReducer {
    type State = TabBarState;
    type Action = TabBarAction;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) -> Effects<Self::Action> {
        match action {
            TabBarAction::TabSelected(tab) => {
                state.selected = tab;
                none()
            }

            TabBarAction::FetchProfile => {
                let client = self.client.clone();
                vec![Effect::task(async move {
                    TabBarAction::ProfileFetched(client.send(&FetchProfileRequest).await)
                })]
            }

            TabBarAction::ProfileFetched(Ok(dto)) => {
                state.my_profile = Some(dto.into());
                none()
            }
            TabBarAction::ProfileFetched(Err(err)) => vec![Self::toast_for(err.to_string())],

            TabBarAction::UploadButtonTapped => {
                state.is_upload_presented = true;
                state.upload = Some(UploadState::default());
                none()
            }

            TabBarAction::Upload(action) => {
                // Outcomes the tab bar reports on the composer's behalf.
                let failure = match &action {
                    UploadAction::ImageUploaded(Err(err)) | UploadAction::Submitted(Err(err)) => {
                        Some(err.to_string())
                    }
                    _ => None,
                };
                let submitted = matches!(action, UploadAction::Submitted(Ok(_)));

                let mut effects: Effects<TabBarAction> = Vec::new();
                if let Some(upload) = state.upload.as_mut() {
                    let child = self.upload.reduce(upload, action);
                    effects.extend(map_effects(child, TabBarAction::Upload));
                }

                if let Some(message) = failure {
                    effects.push(Self::toast_for(message));
                }
                if submitted {
                    state.is_upload_presented = false;
                    state.upload = None;
                    effects.push(Effect::send(TabBarAction::ShowToast(Toast::new(
                        UPLOAD_TOAST_TITLE,
                    ))));
                    effects.push(Effect::send(TabBarAction::Home(HomeAction::Refresh)));
                }
                effects
            }

            TabBarAction::Home(action) => {
                let wants_profile = matches!(action, HomeAction::SettingButtonTapped);

                let child = self.home.reduce(&mut state.home, action);
                let mut effects = map_effects(child, TabBarAction::Home);

                // Home asks for settings; answer with the fetched profile.
                if wants_profile {
                    if let Some(profile) = &state.my_profile {
                        effects.push(Effect::send(TabBarAction::Home(
                            HomeAction::ProfileReceived(profile.clone()),
                        )));
                    }
                }
                effects
            }

            TabBarAction::ShowToast(toast) => deliver_toast(
                &mut state.toast,
                toast,
                TabBarAction::ShowToast,
                TabBarAction::ToastDismissed,
            ),
            TabBarAction::ToastDismissed => {
                state.toast.visible = false;
                none()
            }
        }
    }
}
