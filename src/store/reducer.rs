//! Reducer trait for the unidirectional state container.

use super::action::Action;
use super::effect::Effects;
use super::state::FeatureState;

/// Reducer transforms state based on actions and schedules effects.
///
/// The reducer is the only place where state transitions happen. It mutates
/// the state in place and returns the effects to run; it must not perform
/// I/O itself. Collaborators (API client, pasteboard) are passed in at
/// construction so reducers stay testable.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: FeatureState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action, mutate the state, and return follow-up effects.
    fn reduce(&self, state: &mut Self::State, action: Self::Action) -> Effects<Self::Action>;
}
