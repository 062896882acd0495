//! Intents for the notification slice.

/// Intents targeting the notification slice directly.
///
/// Notifications are also set by authentication successes, which the
/// reducer observes from the session intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageIntent {
    /// Clear the current notification.
    Dismiss,
}
