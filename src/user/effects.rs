//! Asynchronous session workflows.
//!
//! Login, signup and logout share one shape: dispatch a begin intent,
//! perform the HTTP call, dispatch the terminal intent derived from the
//! outcome. Successful login and signup additionally ask the navigator
//! for the home route.

use std::sync::Arc;

use crate::api::{ApiClient, Credentials};
use crate::navigation::{Navigator, Route};
use crate::store::StoreHandle;

use super::intent::UserIntent;

/// Side-effecting workflows for the session slice.
pub struct UserEffects {
    api: Arc<ApiClient>,
    store: StoreHandle,
    navigator: Arc<dyn Navigator>,
}

impl UserEffects {
    pub fn new(api: Arc<ApiClient>, store: StoreHandle, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            api,
            store,
            navigator,
        }
    }

    fn dispatch(&self, intent: UserIntent) {
        self.store.dispatch(intent.into());
    }

    /// Flip the form between login and signup mode. No network involved.
    pub fn toggle_login_mode(&self) {
        self.dispatch(UserIntent::ToggleLoginMode);
    }

    /// Log in and navigate home on success.
    pub async fn login(&self, credentials: &Credentials) {
        self.dispatch(UserIntent::LoginRequest);
        match self.api.login(credentials).await {
            Ok(message) => {
                self.dispatch(UserIntent::LoginSuccess { message });
                self.navigator.navigate(Route::Home);
            }
            Err(err) => {
                tracing::warn!(error = %err, "login failed");
                self.dispatch(UserIntent::LoginFailed {
                    message: err.server_message(),
                });
            }
        }
    }

    /// Create an account and navigate home on success.
    pub async fn sign_up(&self, credentials: &Credentials) {
        self.dispatch(UserIntent::SignupRequest);
        match self.api.signup(credentials).await {
            Ok(message) => {
                self.dispatch(UserIntent::SignupSuccess { message });
                self.navigator.navigate(Route::Home);
            }
            Err(err) => {
                tracing::warn!(error = %err, "signup failed");
                self.dispatch(UserIntent::SignupFailed {
                    message: err.server_message(),
                });
            }
        }
    }

    /// End the session.
    ///
    /// On failure the reducer keeps the session authenticated; see
    /// [`super::UserReducer`]'s `LogoutFailed` transition.
    pub async fn log_out(&self) {
        self.dispatch(UserIntent::LogoutRequest);
        match self.api.logout().await {
            Ok(()) => self.dispatch(UserIntent::LogoutSuccess),
            Err(err) => {
                tracing::warn!(error = %err, "logout failed");
                self.dispatch(UserIntent::LogoutFailed);
            }
        }
    }
}
