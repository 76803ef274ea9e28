//! Toast banner model and the shared presentation sequencing rule.

use crate::store::{Effect, Effects};

/// How long a toast stays on screen.
pub const TOAST_DISPLAY_MILLIS: u64 = 2000;

/// How long a toast request waits while another toast is showing.
pub const TOAST_REQUEUE_MILLIS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Toast {
    pub title: String,
    pub message: Option<String>,
}

impl Toast {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
        }
    }

    pub fn with_message(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: Some(message.into()),
        }
    }
}

/// Toast slice embedded in every screen state that can show banners.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastState {
    pub visible: bool,
    pub toast: Toast,
}

/// Apply the toast sequencing rule.
///
/// If a toast is already showing, the request is re-queued after
/// [`TOAST_REQUEUE_MILLIS`] via `requeue`. Otherwise the toast becomes
/// visible and `dismissed` is delivered after [`TOAST_DISPLAY_MILLIS`].
pub fn deliver_toast<A, F>(
    state: &mut ToastState,
    toast: Toast,
    requeue: F,
    dismissed: A,
) -> Effects<A>
where
    A: Send + 'static,
    F: FnOnce(Toast) -> A,
{
    if state.visible {
        vec![Effect::delay_millis(TOAST_REQUEUE_MILLIS, requeue(toast))]
    } else {
        state.visible = true;
        state.toast = toast;
        vec![Effect::delay_millis(TOAST_DISPLAY_MILLIS, dismissed)]
    }
}
