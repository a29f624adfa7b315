use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A published post. `id` is the insertion sequence and doubles as the
/// ordering tie-break for posts created in the same instant.
#[derive(Clone, Debug, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub author_id: Uuid,
    pub group_id: Option<i64>,
    pub text: String,
    pub image_uri: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload. The author always comes from the authenticated actor,
/// never from the request body.
#[derive(Clone, Debug)]
pub struct NewPost {
    pub author_id: Uuid,
    pub group_id: Option<i64>,
    pub text: String,
    pub image_uri: Option<String>,
}

/// Full-replace edit payload, mirroring the create form.
#[derive(Clone, Debug)]
pub struct PostChanges {
    pub group_id: Option<i64>,
    pub text: String,
    pub image_uri: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub author_id: Uuid,
    pub group_id: Option<i64>,
    pub text: String,
    pub image_uri: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        PostResponse {
            id: post.id,
            author_id: post.author_id,
            group_id: post.group_id,
            text: post.text,
            image_uri: post.image_uri,
            created_at: post.created_at,
        }
    }
}
