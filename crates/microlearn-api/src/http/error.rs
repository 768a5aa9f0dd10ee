//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use microlearn_types::dispatch::DispatchError;
use microlearn_types::error::{GenerationError, RepositoryError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The dispatcher gave up on the request.
    Dispatch(DispatchError),
    /// The backend answered but the generated content was unusable.
    Generation(GenerationError),
    /// Knowledge-node storage failure.
    Repository(RepositoryError),
    /// Bad client input.
    Validation(String),
    /// Server-side configuration problem (e.g. missing API key).
    Configuration(String),
}

impl From<DispatchError> for AppError {
    fn from(e: DispatchError) -> Self {
        AppError::Dispatch(e)
    }
}

impl From<GenerationError> for AppError {
    fn from(e: GenerationError) -> Self {
        AppError::Generation(e)
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        AppError::Repository(e)
    }
}

impl AppError {
    /// HTTP status, machine-readable code, and message for this error.
    pub fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Dispatch(DispatchError::RequestFailed { status, .. }) => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_REJECTED",
                format!("Model backend rejected the request (HTTP {status})"),
            ),
            AppError::Dispatch(DispatchError::AllCandidatesExhausted { attempts }) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "NO_MODEL_AVAILABLE",
                format!("No candidate model accepted the request ({attempts} attempts)"),
            ),
            AppError::Dispatch(DispatchError::DeadlineExceeded { deadline_ms }) => (
                StatusCode::GATEWAY_TIMEOUT,
                "UPSTREAM_TIMEOUT",
                format!("Model backend did not answer within {deadline_ms}ms"),
            ),
            AppError::Generation(e) => (
                StatusCode::BAD_GATEWAY,
                "MALFORMED_GENERATION",
                e.to_string(),
            ),
            AppError::Repository(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
                e.to_string(),
            ),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Configuration(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR", msg.clone())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = json!({
            "data": null,
            "meta": {
                "request_id": "",
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "response_time_ms": 0
            },
            "errors": [{
                "code": code,
                "message": message,
            }]
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustion_maps_to_service_unavailable() {
        let resp = AppError::Dispatch(DispatchError::AllCandidatesExhausted { attempts: 8 })
            .into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn upstream_rejection_maps_to_bad_gateway() {
        let resp = AppError::Dispatch(DispatchError::RequestFailed {
            status: 401,
            body: serde_json::Value::Null,
        })
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let resp = AppError::Validation("topic is required".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
