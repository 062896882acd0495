//! The crate-wide intent union.

use crate::message::MessageIntent;
use crate::mvi::Intent;
use crate::topic::TopicIntent;
use crate::user::UserIntent;

/// Every action in the system, as one exhaustively matched union.
///
/// Each dispatched value is offered to every slice reducer; slices
/// decide independently whether to react. That is what lets the
/// notification slice observe authentication successes without any
/// coupling between the user and message modules beyond the intent
/// itself.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    Topic(TopicIntent),
    User(UserIntent),
    Message(MessageIntent),
}

impl Intent for AppIntent {}

impl From<TopicIntent> for AppIntent {
    fn from(intent: TopicIntent) -> Self {
        AppIntent::Topic(intent)
    }
}

impl From<UserIntent> for AppIntent {
    fn from(intent: UserIntent) -> Self {
        AppIntent::User(intent)
    }
}

impl From<MessageIntent> for AppIntent {
    fn from(intent: MessageIntent) -> Self {
        AppIntent::Message(intent)
    }
}
