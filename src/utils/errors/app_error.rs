use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::error_payload::ErrorPayload;

/// Application error types. `Forbidden` and `Unauthenticated` are normally
/// recovered by the handlers as redirects before they ever reach
/// `IntoResponse`; the mappings below cover the paths that surface them.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Only the author may modify this post")]
    Forbidden,

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Validation failed on `{field}`: {message}")]
    Validation { field: &'static str, message: String },

    #[error("An error occurred while accessing the database")]
    DatabaseError(#[from] sqlx::Error),
}

impl AppError {
    pub fn code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> String {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Forbidden => "FORBIDDEN",
            AppError::Unauthenticated => "UNAUTHENTICATED",
            AppError::Validation { .. } => "VALIDATION_FAILED",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
        }
        .to_string()
    }

    /// Field-level detail for re-display, present on validation failures.
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Validation { field, message } => {
                Some(serde_json::json!({ (*field): message }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.code();
        let error_response = ErrorPayload {
            message: self.to_string(),
            code: status.as_u16(),
            r#type: self.error_type(),
            details: self.details(),
        };

        (status, Json(error_response)).into_response()
    }
}
