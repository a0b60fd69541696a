//! HTTP error mapping.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tandem_common::{Error, ValidationError};
use thiserror::Error as ThisError;

/// Error returned by the allocation API.
#[derive(Debug, ThisError)]
#[error(transparent)]
pub struct ApiError(#[from] Error);

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(Error::Validation(err))
    }
}

// Malformed bodies and query strings (non-numeric or out-of-i64 values) are
// input errors, reported in the same envelope as range failures.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(Error::InvalidInput(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(Error::InvalidInput(rejection.body_text()))
    }
}

/// Error body.
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn code(&self) -> &'static str {
        if self.0.is_client_error() {
            "INVALID_INPUT"
        } else {
            "INTERNAL_ERROR"
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Allocation request failed");
        } else {
            tracing::debug!(error = %self.0, "Rejected allocation request");
        }

        let body = serde_json::json!({
            "success": false,
            "error": ApiErrorBody {
                code: self.code().to_string(),
                message: self.0.to_string(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}
