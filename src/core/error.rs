use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

use crate::core::validation::ValidationErrors;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// Business-rule violations inside the ledger engine are never raised as
/// `AppError`; they live in [`ValidationErrors`]. This type only covers the
/// service edge: rejected submissions, bad configuration and malformed bodies.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for a single request-level rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// Submission blocked by one or more field-level violations
    #[error("Document has {} invalid field(s)", .0.len())]
    InvalidDocument(ValidationErrors),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        let body = match self {
            AppError::InvalidDocument(fields) => serde_json::json!({
                "error": {
                    "message": error_message,
                    "code": status_code.as_u16(),
                    "fields": fields,
                }
            }),
            _ => serde_json::json!({
                "error": {
                    "message": error_message,
                    "code": status_code.as_u16(),
                }
            }),
        };

        HttpResponse::build(status_code).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidDocument(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::InvalidDocument(errors)
    }
}
