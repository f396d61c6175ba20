//! Upstream error types.

use axum::http::StatusCode;
use thiserror::Error;

/// Failure to construct the outbound HTTP client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid upstream base URL `{url}`: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("upstream base URL `{0}` cannot carry path segments")]
    NotABase(String),

    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Why a forwarded call did not produce a usable success.
///
/// Never leaves the adapter: `BackendClient::forward` folds it into
/// `BackendResult::Failure`.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream responded {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("upstream body could not be read: {0}")]
    Body(#[source] reqwest::Error),

    #[error("upstream body is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("request body could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

impl UpstreamError {
    /// Status code surfaced to the client for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            UpstreamError::Status { status, .. } => *status,
            UpstreamError::Transport(_)
            | UpstreamError::Body(_)
            | UpstreamError::Decode(_)
            | UpstreamError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
