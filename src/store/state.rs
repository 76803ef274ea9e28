//! Base trait for per-screen state.

/// Marker trait for feature state objects.
///
/// States should be:
/// - Cheap to snapshot (Clone for publishing to observers)
/// - Self-contained (all data needed to render the screen)
/// - Comparable (PartialEq for detecting changes)
pub trait FeatureState: Clone + PartialEq + Default + Send + Sync + 'static {}
