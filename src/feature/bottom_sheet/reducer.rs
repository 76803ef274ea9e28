use crate::store::{none, Effects, Reducer};

use super::action::BottomSheetAction;
use super::state::BottomSheetState;

/// The sheet itself has no transitions: every row tap dismisses it and is
/// acted on by the presenting screen.
pub struct BottomSheetReducer;

impl Reducer for BottomSheetReducer {
    type State = BottomSheetState;
    type Action = BottomSheetAction;

    fn reduce(&self, _state: &mut Self::State, _action: Self::Action) -> Effects<Self::Action> {
        none()
    }
}
