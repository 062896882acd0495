//! Reducer for the notification slice.

use crate::mvi::Reducer;
use crate::store::AppIntent;
use crate::user::UserIntent;

use super::intent::MessageIntent;
use super::state::{MessageState, Severity};

/// Reducer for global notifications.
///
/// Listens across slices: authentication successes carry a
/// server-supplied message that becomes the current notification.
pub struct MessageReducer;

impl Reducer for MessageReducer {
    type State = MessageState;
    type Intent = AppIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AppIntent::User(UserIntent::LoginSuccess { message })
            | AppIntent::User(UserIntent::SignupSuccess { message }) => MessageState {
                message,
                kind: Severity::Success,
            },
            AppIntent::Message(MessageIntent::Dismiss) => MessageState {
                message: String::new(),
                kind: Severity::Success,
            },
            _ => state,
        }
    }
}
