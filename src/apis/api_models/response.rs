use crate::models::comments::CommentResponse;
use crate::models::groups::GroupResponse;
use crate::models::posts::{Post, PostResponse};
use crate::models::users::UserResponse;
use crate::utils::pagination::Page;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedPostsResponse {
    pub items: Vec<PostResponse>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginatedPostsResponse {
    pub fn from_page(page: Page<Post>, limit: u32) -> Self {
        PaginatedPostsResponse {
            items: page.items.into_iter().map(PostResponse::from).collect(),
            total: page.total,
            page: page.page,
            limit,
            total_pages: page.total_pages,
            has_next: page.has_next,
            has_prev: page.has_prev,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupPostsResponse {
    pub group: GroupResponse,
    pub posts: PaginatedPostsResponse,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub author: UserResponse,
    pub posts: PaginatedPostsResponse,
    pub posts_count: i64,
    /// Whether the requesting viewer follows this author; false for
    /// anonymous viewers.
    pub following: bool,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub post: PostResponse,
    pub comments: Vec<CommentResponse>,
    pub author_posts_count: i64,
}
