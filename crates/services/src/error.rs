//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use tutor_core::model::SessionError;

/// Startup configuration problems. These halt the app before any screen renders.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("API key not found; set TUTOR_API_KEY (or OPENROUTER_API_KEY) in the environment or .env")]
    MissingApiKey,
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("invalid timeout value: {0:?}")]
    InvalidTimeout(String),
    #[error("timeout must be between {min} and {max} seconds, got {got}")]
    TimeoutOutOfRange { got: u64, min: u64, max: u64 },
    #[error("the API rejected the configured key (status {0})")]
    CredentialRejected(reqwest::StatusCode),
    #[error("could not build the HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Failures of a single generation call.
///
/// These never reach the session state machine; `GenerationClient` turns them into
/// displayable text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("request timed out")]
    Timeout,
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("response contained no message content")]
    EmptyResponse,
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionServiceError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}
