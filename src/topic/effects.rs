//! Asynchronous topic workflows.
//!
//! Each workflow issues an HTTP call and dispatches plain intents
//! derived from the call's outcome. Failures never escape: they are
//! converted into failure intents carrying fixed, user-facing messages.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::hash::topic_id;
use crate::store::StoreHandle;

use super::intent::TopicIntent;
use super::state::Topic;

/// Shown when a create call fails and the optimistic entry is rolled
/// back.
const CREATE_FAILED: &str = "Oops! Something went wrong and we couldn't create your topic";

/// Shown when a vote or delete call fails. The delete path reuses the
/// vote wording as shipped.
const VOTE_FAILED: &str = "Oops! Something went wrong and we couldn't add your vote";

/// Side-effecting workflows for the topic board.
pub struct TopicEffects {
    api: Arc<ApiClient>,
    store: StoreHandle,
}

impl TopicEffects {
    pub fn new(api: Arc<ApiClient>, store: StoreHandle) -> Self {
        Self { api, store }
    }

    fn dispatch(&self, intent: TopicIntent) {
        self.store.dispatch(intent.into());
    }

    /// Record draft text as the user types.
    pub fn typing(&self, text: &str) {
        self.dispatch(TopicIntent::Typing {
            text: text.to_string(),
        });
    }

    /// Submit a new topic.
    ///
    /// Whitespace-only submissions are dropped without dispatching
    /// anything. A submission whose id is already on the board
    /// dispatches [`TopicIntent::Duplicate`] and skips the network call
    /// entirely. Otherwise the topic is appended optimistically with a
    /// count of 1 and rolled back if the create call fails.
    pub async fn create_topic(&self, text: &str) {
        if text.trim().is_empty() {
            return;
        }

        let id = topic_id(text);
        if self.store.state().topic.contains(&id) {
            self.dispatch(TopicIntent::Duplicate);
            return;
        }

        let topic = Topic {
            id: id.clone(),
            count: 1,
            text: text.to_string(),
        };
        self.dispatch(TopicIntent::CreateRequest {
            id: id.clone(),
            count: topic.count,
            text: topic.text.clone(),
        });

        match self.api.create_topic(&topic).await {
            Ok(()) => self.dispatch(TopicIntent::CreateSuccess),
            Err(err) => {
                tracing::warn!(%id, error = %err, "create topic failed, rolling back");
                self.dispatch(TopicIntent::CreateFailed {
                    id,
                    error: CREATE_FAILED.to_string(),
                });
            }
        }
    }

    /// Vote a topic up.
    pub async fn increment_count(&self, id: &str) {
        self.vote(id, true).await;
    }

    /// Vote a topic down.
    pub async fn decrement_count(&self, id: &str) {
        self.vote(id, false).await;
    }

    async fn vote(&self, id: &str, is_increment: bool) {
        match self.api.vote_topic(id, is_increment).await {
            Ok(()) => {
                let id = id.to_string();
                self.dispatch(if is_increment {
                    TopicIntent::Increment { id }
                } else {
                    TopicIntent::Decrement { id }
                });
            }
            Err(err) => {
                tracing::warn!(%id, error = %err, "vote failed");
                self.dispatch(TopicIntent::RequestFailed {
                    error: VOTE_FAILED.to_string(),
                });
            }
        }
    }

    /// Delete a topic from the board.
    pub async fn destroy_topic(&self, id: &str) {
        match self.api.destroy_topic(id).await {
            Ok(()) => self.dispatch(TopicIntent::Destroy { id: id.to_string() }),
            Err(err) => {
                tracing::warn!(%id, error = %err, "delete failed");
                self.dispatch(TopicIntent::RequestFailed {
                    error: VOTE_FAILED.to_string(),
                });
            }
        }
    }

    /// Refresh the board from the server's list.
    pub async fn fetch_topics(&self) {
        self.dispatch(TopicIntent::FetchRequest);
        match self.api.list_topics().await {
            Ok(topics) => self.dispatch(TopicIntent::FetchSuccess { topics }),
            Err(err) => {
                tracing::warn!(error = %err, "fetch topics failed");
                self.dispatch(TopicIntent::FetchFailed {
                    error: err.to_string(),
                });
            }
        }
    }
}
