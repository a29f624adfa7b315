use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_scalar::{Scalar, Servable};

use crate::AppState;

pub mod actor;
pub mod api_models;
pub mod group_handlers;
pub mod post_handlers;
pub mod profile_handlers;
pub mod user_handlers;

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "posts", description = "Post authoring and feeds"),
        (name = "groups", description = "Group listings"),
        (name = "profiles", description = "Author profiles and the follow graph"),
        (name = "users", description = "User records")
    )
)]
pub struct ApiDoc;

pub fn setup_routes() -> Router<Arc<AppState>> {
    let api_doc = ApiDoc::openapi();

    let post_router = OpenApiRouter::new()
        .routes(routes!(post_handlers::list_posts, post_handlers::create_post))
        .routes(routes!(post_handlers::get_post, post_handlers::delete_post))
        .routes(routes!(post_handlers::edit_post))
        .routes(routes!(post_handlers::add_comment));

    let feed_router = OpenApiRouter::new().routes(routes!(post_handlers::following_feed));

    let group_router = OpenApiRouter::new()
        .routes(routes!(group_handlers::list_groups, group_handlers::create_group))
        .routes(routes!(group_handlers::get_group_posts));

    let profile_router = OpenApiRouter::new()
        .routes(routes!(profile_handlers::get_profile))
        .routes(routes!(profile_handlers::follow_author))
        .routes(routes!(profile_handlers::unfollow_author))
        .routes(routes!(profile_handlers::get_followers));

    let user_router = OpenApiRouter::new().routes(routes!(user_handlers::register_user));

    let post_router = OpenApiRouter::with_openapi(api_doc.clone()).nest("/posts", post_router);
    let feed_router = OpenApiRouter::with_openapi(api_doc.clone()).nest("/feed", feed_router);
    let group_router = OpenApiRouter::with_openapi(api_doc.clone()).nest("/groups", group_router);
    let profile_router =
        OpenApiRouter::with_openapi(api_doc.clone()).nest("/profiles", profile_router);
    let user_router = OpenApiRouter::with_openapi(api_doc).nest("/users", user_router);

    let router = OpenApiRouter::new()
        .merge(post_router)
        .merge(feed_router)
        .merge(group_router)
        .merge(profile_router)
        .merge(user_router);

    let (api_router, api_openapi) = OpenApiRouter::new()
        .nest("/api/v1", router)
        .split_for_parts();

    Router::new()
        .merge(Scalar::with_url("/docs", api_openapi))
        .merge(api_router)
}
