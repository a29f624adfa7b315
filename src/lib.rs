use apis::setup_routes;
use axum::Router;
use repositories::{
    comment_repository::PgCommentRepository, follow_repository::PgFollowRepository,
    group_repository::PgGroupRepository, post_repository::PgPostRepository,
    user_repository::PgUserRepository,
};
use services::{
    cache_service::FeedCache, feed_service::FeedService, follow_service::FollowService,
    group_service::GroupService, post_service::PostService, user_service::UserService,
};
use sqlx::postgres::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use utils::clock::SystemClock;

pub mod apis;
pub mod models;
pub mod repositories;
pub mod services;
pub mod settings;
pub mod utils;

pub struct AppState {
    pub user_service: Arc<UserService>,
    pub group_service: Arc<GroupService>,
    pub follow_service: Arc<FollowService>,
    pub feed_service: Arc<FeedService>,
    pub post_service: Arc<PostService>,
    pub feed_cache: Arc<FeedCache>,
    pub page_size: u32,
}

pub async fn setup_database(database_url: &str) -> Result<Arc<PgPool>, sqlx::Error> {
    let pool = PgPool::connect(database_url).await?;
    Ok(Arc::new(pool))
}

pub async fn setup_router(settings: &settings::Settings) -> anyhow::Result<Router> {
    let db = setup_database(&settings.database_url).await?;
    let state = setup_services(db, settings);
    let router = setup_routes();

    Ok(router
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state)))
}

pub fn setup_services(db: Arc<PgPool>, settings: &settings::Settings) -> AppState {
    let user_repository = Arc::new(PgUserRepository::new(db.clone()));
    let group_repository = Arc::new(PgGroupRepository::new(db.clone()));
    let post_repository = Arc::new(PgPostRepository::new(db.clone()));
    let comment_repository = Arc::new(PgCommentRepository::new(db.clone()));
    let follow_repository = Arc::new(PgFollowRepository::new(db));

    let user_service = Arc::new(UserService::new(user_repository.clone()));
    let group_service = Arc::new(GroupService::new(group_repository.clone()));
    let follow_service = Arc::new(FollowService::new(
        follow_repository,
        user_repository.clone(),
    ));
    let feed_service = Arc::new(FeedService::new(
        post_repository.clone(),
        group_repository.clone(),
        user_repository,
    ));
    let post_service = Arc::new(PostService::new(
        post_repository,
        comment_repository,
        group_repository,
    ));
    let feed_cache = Arc::new(FeedCache::new(
        Duration::from_secs(settings.index_cache_ttl_secs()),
        Arc::new(SystemClock),
    ));

    AppState {
        user_service,
        group_service,
        follow_service,
        feed_service,
        post_service,
        feed_cache,
        page_size: settings.page_size(),
    }
}

pub fn init_tracing(settings: &settings::Settings) {
    let env = settings.environment.clone().unwrap_or("DEV".to_string());
    let level = match env.as_str() {
        "PROD" => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_ansi(env != "PROD")
        .init();
}
