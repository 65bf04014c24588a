//! HTTP mapping for flow errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lostpass_core::FlowError;
use serde_json::json;
use thiserror::Error;

/// A flow error on its way out of a route handler.
///
/// `NotFound` is the one response allowed to echo the input; every other
/// message stays generic so responses never confirm which accounts exist.
/// Collaborator details go to the log, not the client.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub FlowError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            FlowError::NotFound { .. } => (StatusCode::NOT_FOUND, self.0.to_string()),
            FlowError::InvalidChoice => (StatusCode::BAD_REQUEST, self.0.to_string()),
            FlowError::WrongStep => (
                StatusCode::CONFLICT,
                "Submission does not match the current step of this request".to_string(),
            ),
            FlowError::DispatchFailed(detail) => {
                tracing::error!("Password reset dispatch failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unable to send password reset instructions".to_string(),
                )
            }
            FlowError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = json!({ "success": false, "reason": message });
        (status, axum::Json(body)).into_response()
    }
}
