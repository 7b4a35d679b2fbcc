//! Base trait for intents (user/session actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses)
/// - Session events (a transition result coming back from the engine)
/// - Timers
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
