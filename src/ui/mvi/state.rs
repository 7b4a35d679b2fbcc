//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// A state is a plain value: cloned rather than mutated in place, compared
/// to decide whether anything changed, and defaulted to its resting form
/// (for overlays, hidden) so it can be taken out with `std::mem::take`
/// while a reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
