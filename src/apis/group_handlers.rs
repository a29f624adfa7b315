use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    apis::api_models::{
        query::PageQuery,
        request::CreateGroupBody,
        response::{GroupPostsResponse, PaginatedPostsResponse},
    },
    models::groups::GroupResponse,
    services::feed_service::FeedFilter,
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    utils::pagination::paginate,
    AppState,
};

const TAG: &str = "groups";

#[utoipa::path(
    get,
    tag = TAG,
    path = "",
    operation_id = "listGroups",
    responses(
        (status = 200, description = "All groups", body = Vec<GroupResponse>),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn list_groups(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let groups = state.group_service.list_groups().await?;
    Ok(Json(groups))
}

#[utoipa::path(
    post,
    tag = TAG,
    path = "",
    operation_id = "createGroup",
    request_body = CreateGroupBody,
    responses(
        (status = 201, description = "Group created", body = GroupResponse),
        (status = 422, description = "Validation failed", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn create_group(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateGroupBody>,
) -> Result<impl IntoResponse, AppError> {
    let group = state
        .group_service
        .create_group(&body.title, &body.slug, &body.description)
        .await?;
    Ok((StatusCode::CREATED, Json(group)))
}

/// Group metadata plus one page of its posts, newest first.
#[utoipa::path(
    get,
    tag = TAG,
    path = "/{slug}",
    operation_id = "getGroupPosts",
    params(
        ("slug" = String, Path, description = "Group slug"),
        PageQuery
    ),
    responses(
        (status = 200, description = "The group and a page of its posts", body = GroupPostsResponse),
        (status = 404, description = "Group not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn get_group_posts(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let group = state.group_service.require_by_slug(&slug).await?;
    let posts = state
        .feed_service
        .feed(&FeedFilter::ByGroup(slug))
        .await?;
    let page = paginate(posts, state.page_size, query.page_number());

    Ok(Json(GroupPostsResponse {
        group: GroupResponse::from(group),
        posts: PaginatedPostsResponse::from_page(page, state.page_size),
    }))
}
