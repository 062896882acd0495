//! Base trait for state slices.

/// Marker trait for state slices.
///
/// Slices should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data the view needs to render the slice)
/// - Comparable (PartialEq for detecting changes and testing purity)
pub trait SliceState: Clone + PartialEq + Default + Send + 'static {}
