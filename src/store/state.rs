//! Root application state.

use crate::message::MessageState;
use crate::topic::TopicState;
use crate::user::UserState;

/// The whole client state tree: one record per slice.
///
/// All state is transient, held in memory for the lifetime of the
/// client session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub topic: TopicState,
    pub user: UserState,
    pub message: MessageState,
}
