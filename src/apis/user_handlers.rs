use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    apis::api_models::request::RegisterUserBody,
    models::users::UserResponse,
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    AppState,
};

const TAG: &str = "users";

/// Registers a user record. Credentials and sessions belong to the
/// authentication collaborator, not this service.
#[utoipa::path(
    post,
    tag = TAG,
    path = "",
    operation_id = "registerUser",
    request_body = RegisterUserBody,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 422, description = "Validation failed", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterUserBody>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_service.register(&body.username).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
