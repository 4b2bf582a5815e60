//! API error types and JSON response formatting.

use axum::{
    Json,
    extract::{multipart::MultipartError, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use uuid::Uuid;

use crate::Error;
use crate::store::StoreError;
use crate::submission::ValidationError;

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error details in the response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// API error type that converts to HTTP responses.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the error.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Report not found error.
    pub fn report_not_found(id: Uuid) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "REPORT_NOT_FOUND",
            format!("Report '{}' not found", id),
        )
        .with_details(serde_json::json!({ "id": id }))
    }

    /// Submission rejected by validation; every message is listed.
    pub fn validation_failed(messages: &[String]) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "VALIDATION_FAILED",
            format!("Submission failed {} validation rule(s)", messages.len()),
        )
        .with_details(serde_json::json!({ "messages": messages }))
    }

    /// Request body is not valid JSON for the expected type.
    pub fn invalid_json(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, "INVALID_JSON", message)
    }

    /// Uploaded CSV could not be imported.
    pub fn invalid_csv(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_CSV", message)
    }

    /// Malformed multipart upload.
    pub fn invalid_multipart(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_MULTIPART", message)
    }

    /// Required multipart field missing.
    pub fn missing_field(name: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "MISSING_FIELD",
            format!("Multipart field '{}' is required", name),
        )
        .with_details(serde_json::json!({ "field": name }))
    }

    /// Internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code,
                message: self.message,
                details: self.details,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::validation_failed(err.messages())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::InvalidRecord { line, reason } => Self::invalid_csv(err.to_string())
                .with_details(serde_json::json!({ "line": line, "reason": reason })),
            StoreError::Csv(_) => Self::invalid_csv(err.to_string()),
            StoreError::Io(_) => Self::internal(err.to_string()),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(err) => err.into(),
            Error::Store(err) => err.into(),
            _ => Self::internal(err.to_string()),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self::invalid_multipart(err.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_json(rejection.status(), rejection.body_text())
    }
}
