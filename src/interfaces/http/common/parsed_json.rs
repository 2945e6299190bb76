//! JSON body extractor for Axum
//!
//! `ParsedJson<T>` works like `axum::Json<T>`, but checks the Content-Type
//! header up front and reports each failure mode with the envelope wording
//! clients already rely on: missing header, unsupported media type, and
//! unparseable body are three distinct messages.

use axum::extract::{FromRequest, Request};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;

use super::envelope::Envelope;

pub struct ParsedJson<T>(pub T);

/// Error type for `ParsedJson` extraction failures.
#[derive(Debug)]
pub enum ParsedJsonRejection {
    /// No Content-Type header on the request.
    MissingContentType,
    /// A Content-Type other than `application/json`.
    UnsupportedContentType(String),
    /// Body failed to parse or deserialize.
    InvalidBody,
}

impl ParsedJsonRejection {
    pub fn message(&self) -> String {
        match self {
            Self::MissingContentType => {
                "Request body is empty, application/json is required.".to_string()
            }
            Self::UnsupportedContentType(content_type) => {
                format!("Content-Type {content_type} is not supported. Use application/json.")
            }
            Self::InvalidBody => "Error loading JSON data. Invalid JSON provided.".to_string(),
        }
    }

    pub fn envelope(&self) -> Envelope {
        Envelope::message(400, self.message())
    }
}

impl IntoResponse for ParsedJsonRejection {
    fn into_response(self) -> Response {
        self.envelope().into_response()
    }
}

impl<S, T> FromRequest<S> for ParsedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ParsedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let Some(content_type) = content_type else {
            return Err(ParsedJsonRejection::MissingContentType);
        };

        // Accept media-type parameters such as `; charset=utf-8`.
        let essence = content_type.split(';').next().unwrap_or("").trim();
        if essence != "application/json" {
            return Err(ParsedJsonRejection::UnsupportedContentType(content_type));
        }

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| ParsedJsonRejection::InvalidBody)?;

        Ok(ParsedJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use serde_json::Value;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct TestBody {
        name: String,
    }

    async fn handler(ParsedJson(body): ParsedJson<TestBody>) -> String {
        body.name
    }

    fn app() -> Router {
        Router::new().route("/test", post(handler))
    }

    async fn send(req: Request<Body>) -> axum::http::Response<Body> {
        use tower::Service;
        let mut svc = app().into_service();
        svc.call(req).await.unwrap()
    }

    async fn body_json(response: axum::http::Response<Body>) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn valid_body_extracts() {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name": "vessel"}"#))
            .unwrap();

        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn charset_parameter_is_accepted() {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/json; charset=utf-8")
            .body(Body::from(r#"{"name": "vessel"}"#))
            .unwrap();

        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_content_type_names_the_requirement() {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .body(Body::from(r#"{"name": "vessel"}"#))
            .unwrap();

        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(
            body["msg"],
            "Request body is empty, application/json is required."
        );
    }

    #[tokio::test]
    async fn unsupported_content_type_is_echoed() {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "text/plain")
            .body(Body::from("name=vessel"))
            .unwrap();

        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(
            body["msg"],
            "Content-Type text/plain is not supported. Use application/json."
        );
    }

    #[tokio::test]
    async fn unparseable_body_is_rejected() {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/json")
            .body(Body::from("not json"))
            .unwrap();

        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["msg"], "Error loading JSON data. Invalid JSON provided.");
    }
}
