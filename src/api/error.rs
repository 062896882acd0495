//! Error types for the REST client.

use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a status other than 200.
    #[error("Server returned status {status}")]
    Status {
        status: u16,
        /// Message extracted from the error payload, when present.
        message: Option<String>,
    },

    /// A 200 response whose body could not be decoded.
    #[error("Failed to decode response body: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// The server-supplied message carried by an error payload, if any.
    pub fn server_message(&self) -> Option<String> {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            _ => None,
        }
    }
}
