//! Intents for the session slice.

/// Intents produced by the session workflows and the mode toggle.
///
/// Failure intents carry the message extracted from the server's error
/// payload when one was provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    /// Switch the form between login and signup mode.
    ToggleLoginMode,

    LoginRequest,
    LoginSuccess { message: String },
    LoginFailed { message: Option<String> },

    SignupRequest,
    SignupSuccess { message: String },
    SignupFailed { message: Option<String> },

    LogoutRequest,
    LogoutSuccess,
    LogoutFailed,
}
