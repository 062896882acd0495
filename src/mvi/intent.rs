//! Base trait for intents (user/system actions).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (submitting a topic, pressing a vote button)
/// - Terminal outcomes of HTTP calls (success/failure follow-ups)
///
/// Intents are processed by reducers to produce new states. Every
/// dispatched intent is offered to every slice reducer; a slice that
/// does not recognize an intent returns its state unchanged.
pub trait Intent: Clone + Send + 'static {}
