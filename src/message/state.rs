//! State for the notification slice.

use crate::mvi::SliceState;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
}

/// A single transient notification shown across the app.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageState {
    /// Current notification text; empty when nothing is shown.
    pub message: String,
    pub kind: Severity,
}

impl SliceState for MessageState {}
