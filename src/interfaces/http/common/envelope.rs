//! Response envelope for the accounts API
//!
//! Every endpoint answers with the same body shape,
//! `{"cd": <status>, "msg": <text>, "data": <payload|null>}`, and the HTTP
//! status always mirrors `cd`. Clients that only read the body therefore
//! see exactly what clients that only read the wire status see.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Envelope {
    /// Status code, repeated in the body.
    pub cd: u16,
    /// Human-readable outcome; empty on plain successes.
    pub msg: String,
    /// Payload, or `null` when the operation has nothing to return.
    #[schema(value_type = Object)]
    pub data: Value,
}

impl Envelope {
    pub fn new(cd: u16, msg: impl Into<String>, data: Value) -> Self {
        Self {
            cd,
            msg: msg.into(),
            data,
        }
    }

    /// 200 with a payload and no message.
    pub fn success(data: Value) -> Self {
        Self::new(200, "", data)
    }

    /// Status and message only, `data: null`.
    pub fn message(cd: u16, msg: impl Into<String>) -> Self {
        Self::new(cd, msg, Value::Null)
    }

    fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.cd).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<DomainError> for Envelope {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::BadRequest(msg) => Self::message(400, msg),
            DomainError::NotFound(msg) => Self::message(404, msg),
            DomainError::Forbidden(msg) => Self::message(403, msg),
            DomainError::Conflict(msg) => Self::message(208, msg),
            DomainError::Internal(detail) => {
                // The detail stays in the log; the caller gets a generic line.
                error!(%detail, "Unexpected internal error");
                Self::message(500, "Oops something might have went wrong.")
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::json;

    use super::*;

    #[test]
    fn success_has_empty_message() {
        let envelope = Envelope::success(json!({"username": "vessel"}));
        assert_eq!(envelope.cd, 200);
        assert_eq!(envelope.msg, "");
        assert_eq!(envelope.data["username"], "vessel");
    }

    #[test]
    fn message_carries_null_data() {
        let envelope = Envelope::message(404, "Account not found.");
        assert_eq!(envelope.cd, 404);
        assert!(envelope.data.is_null());
    }

    #[test]
    fn domain_errors_map_to_their_status() {
        let cases = [
            (DomainError::BadRequest("b".to_string()), 400, "b"),
            (DomainError::NotFound("n".to_string()), 404, "n"),
            (DomainError::Forbidden("f".to_string()), 403, "f"),
            (DomainError::Conflict("c".to_string()), 208, "c"),
        ];
        for (err, cd, msg) in cases {
            let envelope = Envelope::from(err);
            assert_eq!(envelope.cd, cd);
            assert_eq!(envelope.msg, msg);
        }
    }

    #[test]
    fn internal_detail_never_reaches_the_caller() {
        let envelope = Envelope::from(DomainError::Internal(
            "bcrypt blew up at memory.rs:42".to_string(),
        ));
        assert_eq!(envelope.cd, 500);
        assert_eq!(envelope.msg, "Oops something might have went wrong.");
    }

    #[tokio::test]
    async fn response_status_mirrors_cd() {
        let response = Envelope::message(208, "duplicate").into_response();
        assert_eq!(response.status(), StatusCode::ALREADY_REPORTED);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["cd"], 208);
        assert_eq!(body["msg"], "duplicate");
        assert!(body["data"].is_null());
    }
}
