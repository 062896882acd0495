//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_backend;

use std::sync::Arc;

use goodstick::api::ApiClient;
use goodstick::config::ApiConfig;
use goodstick::navigation::{Navigator, Route};
use parking_lot::Mutex;

/// Build an `ApiClient` pointed at a mock backend.
pub fn api_client(base_url: &str) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }))
}

/// Navigator that records every requested route.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().push(route);
    }
}
