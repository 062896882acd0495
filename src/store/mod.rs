//! The root store: all slices behind a single dispatch entry point.

mod intent;
mod state;

pub use intent::AppIntent;
pub use state::AppState;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::message::MessageReducer;
use crate::mvi::Reducer;
use crate::topic::TopicReducer;
use crate::user::UserReducer;

/// Runs one slice reducer over the store's current slice value.
macro_rules! reduce_slice {
    ($store:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $store.state.$field =
            <$reducer>::reduce(std::mem::take(&mut $store.state.$field), $intent);
    };
}

/// The state container. Owns the state tree; all mutation goes through
/// [`Store::dispatch`].
#[derive(Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state tree.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Reduce one intent across every slice.
    ///
    /// Slices that do not recognize the intent keep their value
    /// unchanged.
    pub fn dispatch(&mut self, intent: AppIntent) {
        tracing::trace!(?intent, "dispatch");
        reduce_slice!(self, topic, TopicReducer, intent.clone());
        reduce_slice!(self, user, UserReducer, intent.clone());
        reduce_slice!(self, message, MessageReducer, intent);
    }
}

/// Cloneable handle shared between the UI and the effects modules.
///
/// Dispatches are serialized by the inner mutex: one intent is fully
/// reduced across all slices before the next is accepted, so no two
/// reducer invocations ever overlap. Workflows suspend only across
/// their HTTP await and re-enter the store when the call completes.
#[derive(Clone, Default)]
pub struct StoreHandle {
    inner: Arc<Mutex<Store>>,
}

impl StoreHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&self, intent: AppIntent) {
        self.inner.lock().dispatch(intent);
    }

    /// Snapshot of the current state tree.
    pub fn state(&self) -> AppState {
        self.inner.lock().state().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageIntent;
    use crate::topic::TopicIntent;
    use crate::user::UserIntent;

    #[test]
    fn login_success_updates_user_and_message_slices() {
        let mut store = Store::new();
        store.dispatch(AppIntent::User(UserIntent::LoginSuccess {
            message: "Welcome back".into(),
        }));

        let state = store.state();
        assert!(state.user.authenticated);
        assert_eq!(state.message.message, "Welcome back");
        assert_eq!(state.topic, Default::default());
    }

    #[test]
    fn topic_intents_leave_other_slices_untouched() {
        let mut store = Store::new();
        store.dispatch(AppIntent::Topic(TopicIntent::Typing {
            text: "draft".into(),
        }));

        let state = store.state();
        assert_eq!(state.topic.new_topic, "draft");
        assert_eq!(state.user, Default::default());
        assert_eq!(state.message, Default::default());
    }

    #[test]
    fn dismiss_only_touches_message_slice() {
        let mut store = Store::new();
        store.dispatch(AppIntent::User(UserIntent::SignupSuccess {
            message: "Account created".into(),
        }));
        store.dispatch(AppIntent::Message(MessageIntent::Dismiss));

        let state = store.state();
        assert_eq!(state.message.message, "");
        assert!(state.user.authenticated);
    }

    #[test]
    fn handle_serializes_dispatch_and_snapshots() {
        let handle = StoreHandle::new();
        handle.dispatch(AppIntent::Topic(TopicIntent::FetchRequest));
        assert!(handle.state().topic.is_fetching);

        let clone = handle.clone();
        clone.dispatch(AppIntent::Topic(TopicIntent::FetchSuccess { topics: vec![] }));
        assert!(!handle.state().topic.is_fetching);
    }
}
