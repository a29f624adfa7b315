use serde::Deserialize;
use utoipa::ToSchema;

/// Create payload. There is deliberately no author field: the author is
/// always the authenticated actor.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostBody {
    pub text: String,
    pub group_id: Option<i64>,
    /// Opaque attachment reference; storage is the collaborator's concern.
    pub image_uri: Option<String>,
}

/// Full-replace edit payload, mirroring the create form.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostBody {
    pub text: String,
    pub group_id: Option<i64>,
    pub image_uri: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentBody {
    pub text: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserBody {
    pub username: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupBody {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
}
