//! Reducer for the session slice.

use crate::mvi::Reducer;
use crate::store::AppIntent;

use super::intent::UserIntent;
use super::state::UserState;

/// Reducer for session state transitions.
///
/// `authenticated` and `message` move only on terminal intents; the
/// begin intents only raise `is_waiting` and clear the error text.
pub struct UserReducer;

impl Reducer for UserReducer {
    type State = UserState;
    type Intent = AppIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let AppIntent::User(intent) = intent else {
            return state;
        };

        match intent {
            UserIntent::ToggleLoginMode => UserState {
                is_login: !state.is_login,
                message: String::new(),
                ..state
            },

            UserIntent::LoginRequest | UserIntent::SignupRequest | UserIntent::LogoutRequest => {
                UserState {
                    is_waiting: true,
                    message: String::new(),
                    ..state
                }
            }

            UserIntent::LoginSuccess { .. } | UserIntent::SignupSuccess { .. } => UserState {
                is_waiting: false,
                authenticated: true,
                message: String::new(),
                ..state
            },

            UserIntent::LoginFailed { message } | UserIntent::SignupFailed { message } => {
                UserState {
                    is_waiting: false,
                    authenticated: false,
                    message: message.unwrap_or_default(),
                    ..state
                }
            }

            UserIntent::LogoutSuccess => UserState {
                is_waiting: false,
                authenticated: false,
                ..state
            },
            // A failed logout leaves the session authenticated.
            UserIntent::LogoutFailed => UserState {
                is_waiting: false,
                authenticated: true,
                ..state
            },
        }
    }
}
