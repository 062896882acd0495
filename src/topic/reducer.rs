//! Reducer for the topic board.

use crate::mvi::Reducer;
use crate::store::AppIntent;

use super::intent::TopicIntent;
use super::state::{Topic, TopicState};

/// Reducer for topic board transitions.
///
/// Pure function; the HTTP calls happen in [`super::TopicEffects`]
/// around the dispatch.
pub struct TopicReducer;

impl Reducer for TopicReducer {
    type State = TopicState;
    type Intent = AppIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let AppIntent::Topic(intent) = intent else {
            return state;
        };

        match intent {
            TopicIntent::Typing { text } => TopicState {
                new_topic: text,
                ..state
            },

            TopicIntent::CreateRequest { id, count, text } => {
                let mut topics = state.topics;
                topics.push(Topic { id, count, text });
                TopicState {
                    topics,
                    new_topic: String::new(),
                    ..state
                }
            }
            // The optimistic entry already stands.
            TopicIntent::CreateSuccess => state,
            TopicIntent::CreateFailed { id, .. } => {
                let mut topics = state.topics;
                topics.retain(|t| t.id != id);
                TopicState { topics, ..state }
            }
            TopicIntent::Duplicate => state,

            TopicIntent::Increment { id } => adjust_count(state, &id, |count| count + 1),
            TopicIntent::Decrement { id } => {
                adjust_count(state, &id, |count| count.saturating_sub(1))
            }
            TopicIntent::Destroy { id } => {
                let mut topics = state.topics;
                topics.retain(|t| t.id != id);
                TopicState { topics, ..state }
            }
            // Counts were never optimistically changed, so there is
            // nothing to roll back.
            TopicIntent::RequestFailed { .. } => state,

            TopicIntent::FetchRequest => TopicState {
                is_fetching: true,
                ..state
            },
            TopicIntent::FetchSuccess { topics } => TopicState {
                topics,
                is_fetching: false,
                ..state
            },
            TopicIntent::FetchFailed { .. } => TopicState {
                is_fetching: false,
                ..state
            },
        }
    }
}

fn adjust_count(state: TopicState, id: &str, apply: impl Fn(u32) -> u32) -> TopicState {
    let topics = state
        .topics
        .into_iter()
        .map(|t| {
            if t.id == id {
                Topic {
                    count: apply(t.count),
                    ..t
                }
            } else {
                t
            }
        })
        .collect();
    TopicState { topics, ..state }
}
