//! Base trait for model state in MVI architecture.

/// Marker trait for model state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render a view of the slice)
/// - Comparable (PartialEq for detecting changes)
pub trait ModelState: Clone + PartialEq + Default + Send + 'static {}
