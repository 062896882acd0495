//! State for the session slice.

use crate::mvi::SliceState;

/// Authentication and session-form UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserState {
    /// True when the form is in login mode, false in signup mode.
    /// A UI toggle, not session status.
    pub is_login: bool,
    /// True strictly between a begin intent and its terminal intent.
    pub is_waiting: bool,
    pub authenticated: bool,
    /// Last error shown to the user; empty when none.
    pub message: String,
}

impl Default for UserState {
    fn default() -> Self {
        Self {
            is_login: true,
            is_waiting: false,
            authenticated: false,
            message: String::new(),
        }
    }
}

impl SliceState for UserState {}
