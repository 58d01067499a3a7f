use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use service::errors::ServiceError;
use service::validate::Violation;

/// HTTP-facing error; every service failure is converted here at the
/// resource boundary and nothing is swallowed.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    violations: Vec<Violation>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), violations: Vec::new() }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(violations) => Self {
                status: StatusCode::BAD_REQUEST,
                message: "validation failed".into(),
                violations,
            },
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            // Deliberately generic: does not reveal whether the email exists.
            ServiceError::Unauthorized => {
                Self::new(StatusCode::UNAUTHORIZED, "invalid email or password")
            }
            ServiceError::Repository(msg) => {
                error!(error = %msg, "repository failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = if self.violations.is_empty() {
            json!({ "error": self.message })
        } else {
            json!({ "error": self.message, "violations": self.violations })
        };
        (self.status, Json(body)).into_response()
    }
}
