//! Base trait for actions in the unidirectional state container.

/// Marker trait for action objects.
///
/// Actions represent:
/// - User intentions (button taps, text-field edits)
/// - Binding mutations from the view layer
/// - Completions of asynchronous effects (success or typed failure)
///
/// Actions are immutable once constructed and are consumed by a reducer.
pub trait Action: Send + 'static {}
