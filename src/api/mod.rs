//! REST client for the topic and session endpoints.
//!
//! Success is exactly HTTP 200. Any other status becomes
//! [`ApiError::Status`] with the error payload's `message` field
//! extracted when the server provided one.

mod error;

pub use error::ApiError;

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::topic::Topic;

/// Credentials submitted by the login and signup forms.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `PUT /topic/{id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VotePayload {
    is_full: bool,
    is_increment: bool,
}

/// Body of `GET /topic` responses.
#[derive(Debug, Deserialize)]
struct TopicListBody {
    data: Vec<Topic>,
}

/// Body of session responses, success and error alike.
#[derive(Debug, Deserialize)]
struct SessionBody {
    message: String,
}

/// HTTP client for the backend, configured once at startup.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build the client from configuration.
    pub fn new(config: &ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .expect("Failed to build API client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /topic/{id}`: create a topic.
    pub async fn create_topic(&self, topic: &Topic) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/topic/{}", topic.id)))
            .json(topic)
            .send()
            .await
            .map_err(|source| ApiError::Connection { source })?;
        expect_ok(response).await.map(|_| ())
    }

    /// `PUT /topic/{id}`: adjust a topic's vote count by one.
    pub async fn vote_topic(&self, id: &str, is_increment: bool) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/topic/{id}")))
            .json(&VotePayload {
                is_full: false,
                is_increment,
            })
            .send()
            .await
            .map_err(|source| ApiError::Connection { source })?;
        expect_ok(response).await.map(|_| ())
    }

    /// `DELETE /topic/{id}`: remove a topic.
    pub async fn destroy_topic(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/topic/{id}")))
            .send()
            .await
            .map_err(|source| ApiError::Connection { source })?;
        expect_ok(response).await.map(|_| ())
    }

    /// `GET /topic`: list topics. The response body's `data` field
    /// becomes the new list verbatim.
    pub async fn list_topics(&self) -> Result<Vec<Topic>, ApiError> {
        let response = self
            .client
            .get(self.url("/topic"))
            .send()
            .await
            .map_err(|source| ApiError::Connection { source })?;
        let response = expect_ok(response).await?;
        let body: TopicListBody = response
            .json()
            .await
            .map_err(|source| ApiError::Decode { source })?;
        Ok(body.data)
    }

    /// `POST /login`: returns the server-supplied message.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        self.session_call("/login", credentials).await
    }

    /// `POST /signup`: returns the server-supplied message.
    pub async fn signup(&self, credentials: &Credentials) -> Result<String, ApiError> {
        self.session_call("/signup", credentials).await
    }

    /// `POST /logout`.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url("/logout"))
            .send()
            .await
            .map_err(|source| ApiError::Connection { source })?;
        expect_ok(response).await.map(|_| ())
    }

    async fn session_call(&self, path: &str, credentials: &Credentials) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .json(credentials)
            .send()
            .await
            .map_err(|source| ApiError::Connection { source })?;
        let response = expect_ok(response).await?;
        let body: SessionBody = response
            .json()
            .await
            .map_err(|source| ApiError::Decode { source })?;
        Ok(body.message)
    }
}

/// Treat exactly HTTP 200 as success; otherwise extract the error
/// payload's `message` field when the body parses as one.
async fn expect_ok(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }
    let message = response
        .json::<SessionBody>()
        .await
        .ok()
        .map(|body| body.message);
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}
