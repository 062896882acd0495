//! Intents for the topic board slice.

use super::state::Topic;

/// Intents produced by topic workflows and UI events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicIntent {
    /// Draft text changed.
    Typing { text: String },

    /// Optimistic create: append the topic before the server confirms.
    CreateRequest { id: String, count: u32, text: String },
    /// Server confirmed the create; the optimistic entry stands.
    CreateSuccess,
    /// Create failed; roll back the optimistic entry with this id.
    CreateFailed { id: String, error: String },
    /// Submission hashed to an id already on the board.
    /// No reducer reacts to this yet.
    Duplicate,

    /// Server confirmed an upvote.
    Increment { id: String },
    /// Server confirmed a downvote.
    Decrement { id: String },
    /// Server confirmed a delete.
    Destroy { id: String },
    /// A vote or delete call failed; the board is left untouched.
    RequestFailed { error: String },

    FetchRequest,
    /// Replace the board wholesale with the server's list.
    FetchSuccess { topics: Vec<Topic> },
    FetchFailed { error: String },
}
