use thiserror::Error as ThisError;

/// Message used when a failure carries no human-readable text of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed";

#[derive(ThisError, Debug)]
pub enum Error {
    /// Network-level failure: unreachable host, connection reset, timeout
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response from the server, with the body's `detail` field when present
    #[error("HTTP {status} (detail: {detail:?})")]
    Status {
        status: reqwest::StatusCode,
        detail: Option<String>,
    },

    /// 2xx response whose body did not match the expected shape
    #[error("error decoding response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// Unusable configuration: failed validation at load time, or a base URL
    /// that cannot absorb a resource path
    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

impl Error {
    /// Returns the message shown to users in notifications.
    ///
    /// Preference order: a server-supplied detail field, then the transport
    /// error's own text, then the fixed generic string.
    pub fn user_message(&self) -> String {
        match self {
            Error::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Error::Transport(e) => e.to_string(),
            Error::Status { detail: None, .. } | Error::Decode { .. } => GENERIC_FAILURE_MESSAGE.to_string(),
            Error::Config { message } => message.clone(),
        }
    }

    /// Log full error details for diagnostics - different log levels based on severity
    pub fn log(&self) {
        match self {
            Error::Transport(_) => {
                tracing::error!("Transport error: {:#}", self);
            }
            Error::Status { status, .. } if status.is_server_error() => {
                tracing::error!("Server error: {}", self);
            }
            Error::Status { .. } => {
                tracing::warn!("Request rejected: {}", self);
            }
            Error::Decode { body, .. } => {
                tracing::error!("Failed to decode response: {:#}", self);
                tracing::error!("Response body was: {}", body);
            }
            Error::Config { .. } => {
                tracing::error!("Configuration error: {}", self);
            }
        }
    }
}

/// Type alias for client operation results
pub type Result<T> = std::result::Result<T, Error>;
