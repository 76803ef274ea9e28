use crate::net::feed::ClapFeedRequest;
use crate::net::ApiClient;
use crate::store::{none, Effect, Effects, Reducer};

use super::action::FeedAction;
use super::state::FeedItemState;

pub struct FeedReducer {
    client: ApiClient,
}

impl FeedReducer {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl Reducer for FeedReducer {
    type State = FeedItemState;
    type Action = FeedAction;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) -> Effects<Self::Action> {
        match action {
            // Pasteboard and sheet presentation live in the parent.
            FeedAction::CopyTapped { .. } | FeedAction::MoreTapped => none(),

            FeedAction::ClapTapped => {
                if state.feed.is_clapped {
                    return none();
                }
                // Optimistic update; ClapDone reconciles or rolls back.
                state.feed.is_clapped = true;
                state.feed.clap_count += 1;

                let client = self.client.clone();
                let feed_id = state.feed.id;
                vec![Effect::task(async move {
                    FeedAction::ClapDone(client.send(&ClapFeedRequest { feed_id }).await)
                })]
            }

            FeedAction::ClapDone(Ok(dto)) => {
                state.feed.clap_count = dto.clap_count;
                none()
            }

            FeedAction::ClapDone(Err(err)) => {
                tracing::warn!(feed_id = state.feed.id, "clap failed: {}", err);
                state.feed.is_clapped = false;
                state.feed.clap_count = state.feed.clap_count.saturating_sub(1);
                none()
            }

            FeedAction::AudioTapped => {
                state.is_audio_playing = !state.is_audio_playing;
                none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Session};
    use crate::model::Feed;
    use crate::net::feed::ClapDto;
    use crate::net::NetworkError;

    fn reducer() -> FeedReducer {
        FeedReducer::new(ApiClient::new(Config::default(), Session::new()).unwrap())
    }

    fn item(clap_count: u32, is_clapped: bool) -> FeedItemState {
        FeedItemState::new(
            Feed {
                id: 7,
                clap_count,
                is_clapped,
                ..Feed::default()
            },
            false,
        )
    }

    #[test]
    fn clap_is_optimistic_and_schedules_request() {
        let mut state = item(3, false);
        let effects = reducer().reduce(&mut state, FeedAction::ClapTapped);

        assert!(state.feed.is_clapped);
        assert_eq!(state.feed.clap_count, 4);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn second_clap_is_a_noop() {
        let mut state = item(4, true);
        let effects = reducer().reduce(&mut state, FeedAction::ClapTapped);

        assert_eq!(state.feed.clap_count, 4);
        assert!(effects.is_empty());
    }

    #[test]
    fn clap_done_reconciles_server_count() {
        let mut state = item(4, true);
        reducer().reduce(
            &mut state,
            FeedAction::ClapDone(Ok(ClapDto { clap_count: 10 })),
        );
        assert_eq!(state.feed.clap_count, 10);
    }

    #[test]
    fn clap_failure_rolls_back() {
        let mut state = item(4, true);
        reducer().reduce(
            &mut state,
            FeedAction::ClapDone(Err(NetworkError::Timeout { duration: 10 })),
        );
        assert!(!state.feed.is_clapped);
        assert_eq!(state.feed.clap_count, 3);
    }

    #[test]
    fn audio_toggles() {
        let mut state = item(0, false);
        reducer().reduce(&mut state, FeedAction::AudioTapped);
        assert!(state.is_audio_playing);
        reducer().reduce(&mut state, FeedAction::AudioTapped);
        assert!(!state.is_audio_playing);
    }
}
