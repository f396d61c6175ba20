//! Errors detected locally, before or instead of an upstream call.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::routes::messages;

/// A request the gateway answers itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Missing or malformed client input.
    #[error("{0}")]
    Validation(String),

    /// Unknown route under `/api`.
    #[error("{}", messages::NOT_FOUND)]
    NotFound,

    /// Known route, unsupported method.
    #[error("{}", messages::METHOD_NOT_ALLOWED)]
    MethodNotAllowed,

    /// Request body over `security.max_body_size`.
    #[error("{}", messages::PAYLOAD_TOO_LARGE)]
    PayloadTooLarge,

    /// Local failure while handling the request, e.g. an unparseable body.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), error = %self, "Answering locally");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::validation("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ApiError::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(ApiError::internal("x").status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_message_is_the_display() {
        assert_eq!(
            ApiError::validation(messages::SEARCH_QUERY_REQUIRED).to_string(),
            "Từ khóa tìm kiếm không được để trống"
        );
        assert_eq!(ApiError::NotFound.to_string(), messages::NOT_FOUND);
    }
}
