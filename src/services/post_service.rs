use crate::apis::api_models::request::{CommentBody, CreatePostBody, UpdatePostBody};
use crate::models::comments::{Comment, NewComment};
use crate::models::posts::{NewPost, Post, PostChanges};
use crate::repositories::comment_repository::CommentStore;
use crate::repositories::group_repository::GroupStore;
use crate::repositories::post_repository::PostStore;
use crate::utils::errors::app_error::AppError;
use std::sync::Arc;
use uuid::Uuid;

/// Post and comment authoring. The authenticated actor always becomes the
/// author; the request bodies deliberately carry no author field.
pub struct PostService {
    posts: Arc<dyn PostStore>,
    comments: Arc<dyn CommentStore>,
    groups: Arc<dyn GroupStore>,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostStore>,
        comments: Arc<dyn CommentStore>,
        groups: Arc<dyn GroupStore>,
    ) -> Self {
        Self {
            posts,
            comments,
            groups,
        }
    }

    pub async fn create_post(
        &self,
        actor: Option<Uuid>,
        body: CreatePostBody,
    ) -> Result<Post, AppError> {
        let author_id = actor.ok_or(AppError::Unauthenticated)?;
        validate_text(&body.text)?;
        self.check_group(body.group_id).await?;

        let post = self
            .posts
            .insert(NewPost {
                author_id,
                group_id: body.group_id,
                text: body.text,
                image_uri: body.image_uri,
            })
            .await?;
        Ok(post)
    }

    /// Only the author may edit. There is no auth gate here: an anonymous
    /// or non-author attempt is `Forbidden`, which the handler turns into a
    /// redirect to the read-only view.
    pub async fn edit_post(
        &self,
        actor: Option<Uuid>,
        post_id: i64,
        body: UpdatePostBody,
    ) -> Result<Post, AppError> {
        let post = self.get_post(post_id).await?;
        if actor != Some(post.author_id) {
            return Err(AppError::Forbidden);
        }
        validate_text(&body.text)?;
        self.check_group(body.group_id).await?;

        let updated = self
            .posts
            .update(
                post_id,
                PostChanges {
                    group_id: body.group_id,
                    text: body.text,
                    image_uri: body.image_uri,
                },
            )
            .await?;
        Ok(updated)
    }

    /// Author-only hard delete; the post's comments go with it.
    pub async fn delete_post(&self, actor: Option<Uuid>, post_id: i64) -> Result<(), AppError> {
        let post = self.get_post(post_id).await?;
        if actor != Some(post.author_id) {
            return Err(AppError::Forbidden);
        }
        self.posts.delete(post_id).await?;
        Ok(())
    }

    /// Anonymous attempts store nothing and come back `Unauthenticated`
    /// for the handler to recover as a redirect.
    pub async fn add_comment(
        &self,
        actor: Option<Uuid>,
        post_id: i64,
        body: CommentBody,
    ) -> Result<Comment, AppError> {
        self.get_post(post_id).await?;
        let author_id = actor.ok_or(AppError::Unauthenticated)?;
        validate_text(&body.text)?;

        let comment = self
            .comments
            .insert(NewComment {
                post_id,
                author_id,
                text: body.text,
            })
            .await?;
        Ok(comment)
    }

    pub async fn get_post(&self, post_id: i64) -> Result<Post, AppError> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {}", post_id)))
    }

    /// The post, its comments in creation order, and the author's total
    /// post count for the detail view.
    pub async fn post_detail(&self, post_id: i64) -> Result<(Post, Vec<Comment>, i64), AppError> {
        let post = self.get_post(post_id).await?;
        let comments = self.comments.list_by_post(post_id).await?;
        let author_posts_count = self.posts.count_by_author(post.author_id).await?;
        Ok((post, comments, author_posts_count))
    }

    async fn check_group(&self, group_id: Option<i64>) -> Result<(), AppError> {
        if let Some(id) = group_id {
            self.groups
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Group {}", id)))?;
        }
        Ok(())
    }
}

fn validate_text(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation {
            field: "text",
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}
