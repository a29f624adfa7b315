use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};

use crate::{
    apis::actor::Actor,
    apis::api_models::{
        query::PageQuery,
        response::{PaginatedPostsResponse, ProfileResponse},
    },
    models::users::UserResponse,
    services::feed_service::FeedFilter,
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    utils::pagination::paginate,
    AppState,
};

const TAG: &str = "profiles";

const LOGIN_REDIRECT: &str = "/auth/login";

/// An author's profile: their posts, post count, and whether the viewer
/// follows them.
#[utoipa::path(
    get,
    tag = TAG,
    path = "/{username}",
    operation_id = "getProfile",
    params(
        ("username" = String, Path, description = "Author username"),
        PageQuery
    ),
    responses(
        (status = 200, description = "The profile view", body = ProfileResponse),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn get_profile(
    State(state): State<Arc<AppState>>,
    Actor(actor): Actor,
    Path(username): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let author = state.user_service.require_by_username(&username).await?;
    let posts = state
        .feed_service
        .feed(&FeedFilter::ByAuthor(username))
        .await?;
    let posts_count = posts.len() as i64;
    let page = paginate(posts, state.page_size, query.page_number());

    let following = match actor {
        Some(viewer) => state.follow_service.is_following(viewer, author.id).await?,
        None => false,
    };

    Ok(Json(ProfileResponse {
        author: UserResponse::from(author),
        posts: PaginatedPostsResponse::from_page(page, state.page_size),
        posts_count,
        following,
    }))
}

/// Follow this author. Self-follows and repeats are silent no-ops;
/// anonymous callers are sent to login.
#[utoipa::path(
    post,
    tag = TAG,
    path = "/{username}/follow",
    operation_id = "followAuthor",
    params(("username" = String, Path, description = "Author username")),
    responses(
        (status = 200, description = "Edge present after the call"),
        (status = 303, description = "Anonymous caller, redirected to login"),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn follow_author(
    State(state): State<Arc<AppState>>,
    Actor(actor): Actor,
    Path(username): Path<String>,
) -> Result<Response, AppError> {
    match state.follow_service.follow(actor, &username).await {
        Ok(()) => Ok(StatusCode::OK.into_response()),
        Err(AppError::Unauthenticated) => Ok(Redirect::to(LOGIN_REDIRECT).into_response()),
        Err(e) => Err(e),
    }
}

/// Unfollow this author; a missing edge is not an error.
#[utoipa::path(
    post,
    tag = TAG,
    path = "/{username}/unfollow",
    operation_id = "unfollowAuthor",
    params(("username" = String, Path, description = "Author username")),
    responses(
        (status = 200, description = "Edge absent after the call"),
        (status = 303, description = "Anonymous caller, redirected to login"),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn unfollow_author(
    State(state): State<Arc<AppState>>,
    Actor(actor): Actor,
    Path(username): Path<String>,
) -> Result<Response, AppError> {
    match state.follow_service.unfollow(actor, &username).await {
        Ok(()) => Ok(StatusCode::OK.into_response()),
        Err(AppError::Unauthenticated) => Ok(Redirect::to(LOGIN_REDIRECT).into_response()),
        Err(e) => Err(e),
    }
}

#[utoipa::path(
    get,
    tag = TAG,
    path = "/{username}/followers",
    operation_id = "getFollowers",
    params(("username" = String, Path, description = "Author username")),
    responses(
        (status = 200, description = "Who follows this author", body = Vec<UserResponse>),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn get_followers(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let followers = state.follow_service.followers(&username).await?;
    Ok(Json(followers))
}
