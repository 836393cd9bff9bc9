//! Error-to-response mapping for HTTP handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::{Error, LlmError, UpstreamError};

/// Wrapper implementing [`IntoResponse`] for the crate error type.
///
/// Every error becomes a `{ "error": message, "code": CODE }` JSON body;
/// internals are logged, not leaked.
#[derive(Debug)]
pub struct ApiError(Error);

/// Convenience alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = classify(&self.0);
        let body = json!({ "error": message, "code": code });
        (status, Json(body)).into_response()
    }
}

fn classify(error: &Error) -> (StatusCode, &'static str, String) {
    match error {
        Error::InvalidInput(reason) => (StatusCode::BAD_REQUEST, "INVALID_INPUT", reason.clone()),

        Error::Upstream(UpstreamError::Status {
            resource,
            status: 404,
        }) => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{resource} not found"),
        ),
        Error::Upstream(upstream) => (
            StatusCode::BAD_GATEWAY,
            "UPSTREAM_ERROR",
            upstream.to_string(),
        ),

        Error::Llm(LlmError::MissingCredential) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "LLM_NOT_CONFIGURED",
            error.to_string(),
        ),
        Error::Llm(llm) => (StatusCode::BAD_GATEWAY, "LLM_ERROR", llm.to_string()),

        // Both tiers failed; the message carries both causes so the caller
        // can tell missing credentials from an unreachable upstream.
        Error::Exhausted { .. } => (
            StatusCode::SERVICE_UNAVAILABLE,
            "MATCHUPS_UNAVAILABLE",
            error.to_string(),
        ),

        other => {
            tracing::error!(error = %other, "internal error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "an internal error occurred".to_string(),
            )
        }
    }
}
