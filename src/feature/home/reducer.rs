use std::sync::Arc;

use crate::clipboard::Pasteboard;
use crate::feature::bottom_sheet::{BottomSheetAction, BottomSheetReducer, BottomSheetState, SheetKind};
use crate::feature::feed::{FeedAction, FeedItemState, FeedReducer};
use crate::feature::profile_setting::{ProfileSettingAction, ProfileSettingReducer, ProfileSettingState};
use crate::feature::setting::{SettingAction, SettingState};
use crate::model::{deliver_toast, Toast};
use crate::net::feed::{DeleteFeedRequest, FetchFeedsRequest};
use crate::net::ApiClient;
use crate::store::{map_effects, none, Effect, Effects, Reducer};

use super::action::HomeAction;
use super::state::{HomeScene, HomeState};

const COPY_TOAST_TITLE: &str = "Text copied";
const COPY_TOAST_MESSAGE: &str = "The post text is on your clipboard";

/// How long the sheet's dismiss animation runs before the slice is dropped.
const SHEET_DISMISS_MILLIS: u64 = 300;

pub struct HomeReducer {
    client: ApiClient,
    pasteboard: Arc<dyn Pasteboard>,
    feed: FeedReducer,
    bottom_sheet: BottomSheetReducer,
    profile_setting: ProfileSettingReducer,
}

impl HomeReducer {
    pub fn new(client: ApiClient, pasteboard: Arc<dyn Pasteboard>) -> Self {
        Self {
            feed: FeedReducer::new(client.clone()),
            bottom_sheet: BottomSheetReducer,
            profile_setting: ProfileSettingReducer::new(client.clone()),
            client,
            pasteboard,
        }
    }

    fn fetch_feeds(&self) -> Effects<HomeAction> {
        let client = self.client.clone();
        vec![Effect::task(async move {
            HomeAction::FeedsFetched(client.send(&FetchFeedsRequest).await)
        })]
    }
}

impl Reducer for HomeReducer {
    type State = HomeState;
    type Action = HomeAction;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) -> Effects<Self::Action> {
        match action {
            HomeAction::Appeared => {
                state.is_loading = true;
                self.fetch_feeds()
            }
            HomeAction::Refresh => self.fetch_feeds(),

            HomeAction::FeedsFetched(Ok(dtos)) => {
                state.is_loading = false;
                let first_id = dtos.first().map(|dto| dto.id);
                state.feeds.replace_all(dtos.into_iter().map(|dto| {
                    let is_first = Some(dto.id) == first_id;
                    FeedItemState::new(dto.into(), is_first)
                }));
                // Fresh rows never play; the exclusive-playback marker must
                // not outlive the list it points into.
                state.audio_playing_feed = None;
                none()
            }
            HomeAction::FeedsFetched(Err(err)) => {
                state.is_loading = false;
                vec![Effect::send(HomeAction::ShowToast(Toast::new(
                    err.to_string(),
                )))]
            }

            HomeAction::Feed { id, action } => {
                // Parent-observed intentions, captured before the action
                // moves into the child.
                let copied_text = match &action {
                    FeedAction::CopyTapped { text } => Some(text.clone()),
                    _ => None,
                };
                let opened_sheet = matches!(action, FeedAction::MoreTapped);
                let toggled_audio = matches!(action, FeedAction::AudioTapped);

                let mut effects: Effects<HomeAction> = Vec::new();
                if let Some(item) = state.feeds.get_mut(id) {
                    let child = self.feed.reduce(item, action);
                    effects.extend(map_effects(child, move |action| HomeAction::Feed {
                        id,
                        action,
                    }));
                }
                // Unmatched id falls through: the row may have been removed
                // while an effect was in flight.

                if let Some(text) = copied_text {
                    self.pasteboard.write(&text);
                    effects.push(Effect::send(HomeAction::ShowToast(Toast::with_message(
                        COPY_TOAST_TITLE,
                        COPY_TOAST_MESSAGE,
                    ))));
                }

                if opened_sheet {
                    if let Some(item) = state.feeds.get(id) {
                        state.is_bottom_sheet_presented = true;
                        state.bottom_sheet =
                            Some(BottomSheetState::new(item.feed.clone(), SheetKind::Mine));
                    }
                }

                if toggled_audio {
                    // Exclusive playback: stop the previous card first.
                    if let Some(previous) = state.audio_playing_feed {
                        if previous != id {
                            if let Some(item) = state.feeds.get_mut(previous) {
                                item.is_audio_playing = false;
                            }
                        }
                    }
                    let playing = state
                        .feeds
                        .get(id)
                        .map(|item| item.is_audio_playing)
                        .unwrap_or(false);
                    state.audio_playing_feed = playing.then_some(id);
                }

                effects
            }

            HomeAction::SettingButtonTapped => none(),

            HomeAction::ProfileReceived(profile) => {
                state.setting = Some(SettingState { profile });
                state.path.push(HomeScene::Setting);
                none()
            }

            HomeAction::Setting(SettingAction::LicenseTapped) => {
                state.path.push(HomeScene::OpenSourceLicense);
                none()
            }
            HomeAction::Setting(SettingAction::ProfileManagementTapped) => {
                let Some(setting) = &state.setting else {
                    return none();
                };
                state.profile_setting = Some(ProfileSettingState::for_edit(&setting.profile));
                state.path.push(HomeScene::ModifyProfile);
                none()
            }

            HomeAction::BottomSheet(action) => {
                let feed_id = state.bottom_sheet.as_ref().map(|sheet| sheet.feed_id);
                if let Some(sheet) = state.bottom_sheet.as_mut() {
                    // Child has no transitions of its own today; routed for
                    // uniformity with the other slices.
                    let child = self.bottom_sheet.reduce(sheet, action);
                    debug_assert!(child.is_empty());
                }

                state.is_bottom_sheet_presented = false;
                let mut effects = vec![Effect::delay_millis(
                    SHEET_DISMISS_MILLIS,
                    HomeAction::BottomSheetDismissed,
                )];

                if action == BottomSheetAction::DeleteTapped {
                    if let Some(feed_id) = feed_id {
                        let client = self.client.clone();
                        effects.push(Effect::task(async move {
                            HomeAction::FeedDeleted(
                                client.send(&DeleteFeedRequest { feed_id }).await,
                            )
                        }));
                    }
                }

                effects
            }

            HomeAction::BottomSheetDismissed => {
                state.bottom_sheet = None;
                none()
            }

            HomeAction::FeedDeleted(Ok(dto)) => {
                if dto.deleted {
                    vec![Effect::send(HomeAction::Refresh)]
                } else {
                    none()
                }
            }
            HomeAction::FeedDeleted(Err(err)) => vec![Effect::send(HomeAction::ShowToast(
                Toast::new(err.to_string()),
            ))],

            HomeAction::ProfileSetting(action) => {
                let back_tapped = matches!(action, ProfileSettingAction::BackTapped);
                let discard_confirmed = matches!(action, ProfileSettingAction::DiscardConfirmed);

                let mut effects: Effects<HomeAction> = Vec::new();
                if let Some(profile_setting) = state.profile_setting.as_mut() {
                    let child = self.profile_setting.reduce(profile_setting, action);
                    effects.extend(map_effects(child, HomeAction::ProfileSetting));
                }

                let clean_back = back_tapped
                    && state
                        .profile_setting
                        .as_ref()
                        .map(|p| !p.is_back_popup_presented)
                        .unwrap_or(false);
                if clean_back || discard_confirmed {
                    if state.path.last() == Some(&HomeScene::ModifyProfile) {
                        state.path.pop();
                    }
                    state.profile_setting = None;
                }

                effects
            }

            HomeAction::ShowToast(toast) => deliver_toast(
                &mut state.toast,
                toast,
                HomeAction::ShowToast,
                HomeAction::ToastDismissed,
            ),
            HomeAction::ToastDismissed => {
                state.toast.visible = false;
                none()
            }
        }
    }
}
