//! State for the topic board slice.

use serde::{Deserialize, Serialize};

use crate::mvi::SliceState;

/// A votable topic.
///
/// `id` is the content hash of `text`, computed before submission, so a
/// topic's identity is stable across clients and duplicate submissions
/// collapse onto the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub count: u32,
    pub text: String,
}

/// State of the topic board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TopicState {
    /// Topics in insertion order.
    pub topics: Vec<Topic>,
    /// True strictly between a list request and its terminal intent.
    pub is_fetching: bool,
    /// Draft text for the topic being composed.
    pub new_topic: String,
}

impl SliceState for TopicState {}

impl TopicState {
    /// Look up a topic by id.
    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    /// Whether a topic with this id is already on the board.
    pub fn contains(&self, id: &str) -> bool {
        self.topic(id).is_some()
    }
}
