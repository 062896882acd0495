//! Client-side state management for the goodstick topic board.
//!
//! Three independently reduced state slices (topics, user session, and
//! transient notifications) live behind a single [`store::StoreHandle`].
//! UI events and HTTP outcomes enter the system as [`store::AppIntent`]
//! values; pure per-slice reducers fold them into new state. The
//! asynchronous workflows ([`topic::TopicEffects`], [`user::UserEffects`])
//! issue the REST calls and dispatch follow-up intents derived from the
//! results, including the optimistic create-with-rollback on the topic
//! board.

pub mod api;
pub mod config;
pub mod hash;
pub mod logging;
pub mod message;
pub mod mvi;
pub mod navigation;
pub mod store;
pub mod topic;
pub mod user;

pub use api::{ApiClient, ApiError, Credentials};
pub use config::Config;
pub use store::{AppIntent, AppState, Store, StoreHandle};
