use serde::Serialize;
use utoipa::ToSchema;

/// JSON body emitted for every surfaced `AppError`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorPayload {
    /// Human-readable description of what went wrong
    pub message: String,
    /// HTTP status code, duplicated in the body for log correlation
    pub code: u16,
    /// Stable machine-readable error identifier
    pub r#type: String,
    /// Field-level detail, present on validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
