//! Backend outcomes and the client-facing envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

/// Outcome of one forwarded call. Exactly one variant is populated.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendResult {
    /// 2xx from the upstream. `data` is `None` for an empty body.
    Success {
        data: Option<Value>,
        status: StatusCode,
    },
    /// Anything else. `error` is the upstream's wording, for logs only.
    Failure { error: String, status: StatusCode },
}

/// Turn a backend outcome into the response sent to the API client.
///
/// Success mirrors the upstream status and payload. Failure replaces the
/// upstream's wording with `fallback` and keeps its status code.
pub fn normalize(result: BackendResult, fallback: &str) -> Response {
    match result {
        BackendResult::Success { status, .. } if status == StatusCode::NO_CONTENT => {
            StatusCode::NO_CONTENT.into_response()
        }
        BackendResult::Success { data: Some(data), status } => (status, Json(data)).into_response(),
        BackendResult::Success { data: None, status } => status.into_response(),
        BackendResult::Failure { status, .. } => failure(status, fallback),
    }
}

/// Like [`normalize`], but any success becomes `204 No Content`.
pub fn normalize_no_content(result: BackendResult, fallback: &str) -> Response {
    match result {
        BackendResult::Success { .. } => StatusCode::NO_CONTENT.into_response(),
        failed => normalize(failed, fallback),
    }
}

fn failure(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn parts(response: Response) -> (StatusCode, Vec<u8>) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_success_mirrors_status_and_payload() {
        let payload = json!({ "id": 7, "name": "Sunrise Runners", "tags": ["5k", "trail"] });
        let result = BackendResult::Success {
            data: Some(payload.clone()),
            status: StatusCode::CREATED,
        };

        let (status, body) = parts(normalize(result, "Tạo câu lạc bộ thất bại")).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), payload);
    }

    #[tokio::test]
    async fn test_failure_uses_fallback_and_keeps_status() {
        let result = BackendResult::Failure {
            error: "upstream responded 409 Conflict: already a member".into(),
            status: StatusCode::CONFLICT,
        };

        let (status, body) = parts(normalize(result, "Tham gia câu lạc bộ thất bại")).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            json!({ "error": "Tham gia câu lạc bộ thất bại" })
        );
    }

    #[tokio::test]
    async fn test_empty_success_has_empty_body() {
        let (status, body) = parts(normalize(
            BackendResult::Success { data: None, status: StatusCode::OK },
            "x",
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        let (status, body) = parts(normalize(
            BackendResult::Success { data: Some(json!({})), status: StatusCode::NO_CONTENT },
            "x",
        ))
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_no_content_variant() {
        let ok = BackendResult::Success {
            data: Some(json!({ "deleted": true })),
            status: StatusCode::OK,
        };
        let (status, body) = parts(normalize_no_content(ok, "Xóa lời mời thất bại")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let failed = BackendResult::Failure {
            error: "gone".into(),
            status: StatusCode::NOT_FOUND,
        };
        let (status, body) = parts(normalize_no_content(failed, "Xóa lời mời thất bại")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            json!({ "error": "Xóa lời mời thất bại" })
        );
    }
}
