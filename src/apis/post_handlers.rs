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
        request::{CommentBody, CreatePostBody, UpdatePostBody},
        response::{PaginatedPostsResponse, PostDetailResponse},
    },
    models::comments::CommentResponse,
    models::posts::PostResponse,
    services::feed_service::FeedFilter,
    utils::cache_keys::CacheKeys,
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    utils::pagination::paginate,
    AppState,
};

const TAG: &str = "posts";

const LOGIN_REDIRECT: &str = "/auth/login";

fn post_detail_path(post_id: i64) -> String {
    format!("/api/v1/posts/{}", post_id)
}

/// The index listing: every post, newest first. Served through the feed
/// page cache for the configured window.
#[utoipa::path(
    get,
    tag = TAG,
    path = "",
    operation_id = "listPosts",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of the index feed", body = PaginatedPostsResponse),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page_number = query.page_number();
    let filter = FeedFilter::All;
    let key = CacheKeys::feed_page(&filter.cache_key(), page_number);

    if let Some(cached) = state.feed_cache.get(&key) {
        return Ok(Json(cached));
    }

    let posts = state.feed_service.feed(&filter).await?;
    let page = paginate(posts, state.page_size, page_number);
    let response = PaginatedPostsResponse::from_page(page, state.page_size);
    // store under the clamped page so out-of-range requests share one entry
    let key = CacheKeys::feed_page(&filter.cache_key(), response.page);
    state.feed_cache.insert(key, response.clone());
    Ok(Json(response))
}

/// Posts by the authors the viewer follows. Anonymous viewers are sent to
/// the login page.
#[utoipa::path(
    get,
    tag = TAG,
    path = "",
    operation_id = "followingFeed",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of the following feed", body = PaginatedPostsResponse),
        (status = 303, description = "Anonymous viewer, redirected to login"),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn following_feed(
    State(state): State<Arc<AppState>>,
    Actor(actor): Actor,
    Query(query): Query<PageQuery>,
) -> Result<Response, AppError> {
    let Some(viewer) = actor else {
        return Ok(Redirect::to(LOGIN_REDIRECT).into_response());
    };

    let posts = state
        .feed_service
        .feed(&FeedFilter::Following(viewer))
        .await?;
    let page = paginate(posts, state.page_size, query.page_number());
    let response = PaginatedPostsResponse::from_page(page, state.page_size);
    Ok(Json(response).into_response())
}

/// A single post with its comments and the author's post count.
#[utoipa::path(
    get,
    tag = TAG,
    path = "/{id}",
    operation_id = "getPost",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post detail view", body = PostDetailResponse),
        (status = 404, description = "Post not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let (post, comments, author_posts_count) = state.post_service.post_detail(post_id).await?;
    Ok(Json(PostDetailResponse {
        post: PostResponse::from(post),
        comments: comments.into_iter().map(CommentResponse::from).collect(),
        author_posts_count,
    }))
}

/// Publish a post. The route is gated: anonymous callers are redirected to
/// login before the payload is considered. The actor becomes the author
/// unconditionally.
#[utoipa::path(
    post,
    tag = TAG,
    path = "",
    operation_id = "createPost",
    request_body = CreatePostBody,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 303, description = "Anonymous caller, redirected to login"),
        (status = 404, description = "Unknown group", body = ErrorPayload),
        (status = 422, description = "Validation failed", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn create_post(
    State(state): State<Arc<AppState>>,
    Actor(actor): Actor,
    Json(body): Json<CreatePostBody>,
) -> Result<Response, AppError> {
    if actor.is_none() {
        return Ok(Redirect::to(LOGIN_REDIRECT).into_response());
    }

    let post = state.post_service.create_post(actor, body).await?;
    state.feed_cache.flush();
    Ok((StatusCode::CREATED, Json(PostResponse::from(post))).into_response())
}

/// Edit a post. Non-authors land on the read-only detail view instead of
/// an error page.
#[utoipa::path(
    post,
    tag = TAG,
    path = "/{id}/edit",
    operation_id = "editPost",
    params(("id" = i64, Path, description = "Post id")),
    request_body = UpdatePostBody,
    responses(
        (status = 200, description = "Post updated", body = PostResponse),
        (status = 303, description = "Not the author, redirected to the post"),
        (status = 404, description = "Post not found", body = ErrorPayload),
        (status = 422, description = "Validation failed", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn edit_post(
    State(state): State<Arc<AppState>>,
    Actor(actor): Actor,
    Path(post_id): Path<i64>,
    Json(body): Json<UpdatePostBody>,
) -> Result<Response, AppError> {
    match state.post_service.edit_post(actor, post_id, body).await {
        Ok(post) => {
            state.feed_cache.flush();
            Ok(Json(PostResponse::from(post)).into_response())
        }
        Err(AppError::Forbidden) => Ok(Redirect::to(&post_detail_path(post_id)).into_response()),
        Err(e) => Err(e),
    }
}

/// Delete a post and its comments. Author-only, with the same read-only
/// redirect as editing.
#[utoipa::path(
    delete,
    tag = TAG,
    path = "/{id}",
    operation_id = "deletePost",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 303, description = "Not the author, redirected to the post"),
        (status = 404, description = "Post not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn delete_post(
    State(state): State<Arc<AppState>>,
    Actor(actor): Actor,
    Path(post_id): Path<i64>,
) -> Result<Response, AppError> {
    match state.post_service.delete_post(actor, post_id).await {
        Ok(()) => {
            state.feed_cache.flush();
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        Err(AppError::Forbidden) => Ok(Redirect::to(&post_detail_path(post_id)).into_response()),
        Err(e) => Err(e),
    }
}

/// Comment on a post. Anonymous attempts store nothing and are redirected
/// to login; the check lives inside the operation rather than on the route.
#[utoipa::path(
    post,
    tag = TAG,
    path = "/{id}/comments",
    operation_id = "addComment",
    params(("id" = i64, Path, description = "Post id")),
    request_body = CommentBody,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 303, description = "Anonymous caller, redirected to login"),
        (status = 404, description = "Post not found", body = ErrorPayload),
        (status = 422, description = "Validation failed", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn add_comment(
    State(state): State<Arc<AppState>>,
    Actor(actor): Actor,
    Path(post_id): Path<i64>,
    Json(body): Json<CommentBody>,
) -> Result<Response, AppError> {
    match state.post_service.add_comment(actor, post_id, body).await {
        Ok(comment) => {
            Ok((StatusCode::CREATED, Json(CommentResponse::from(comment))).into_response())
        }
        Err(AppError::Unauthenticated) => Ok(Redirect::to(LOGIN_REDIRECT).into_response()),
        Err(e) => Err(e),
    }
}
