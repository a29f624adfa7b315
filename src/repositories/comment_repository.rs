use crate::models::comments::{Comment, NewComment};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn insert(&self, new_comment: NewComment) -> Result<Comment, sqlx::Error>;
    async fn list_by_post(&self, post_id: i64) -> Result<Vec<Comment>, sqlx::Error>;
}

pub struct PgCommentRepository {
    db: Arc<PgPool>,
}

impl PgCommentRepository {
    pub fn new(db: Arc<PgPool>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentStore for PgCommentRepository {
    async fn insert(&self, new_comment: NewComment) -> Result<Comment, sqlx::Error> {
        sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (post_id, author_id, text)
            VALUES ($1, $2, $3)
            RETURNING id, post_id, author_id, text, created_at
            "#,
        )
        .bind(new_comment.post_id)
        .bind(new_comment.author_id)
        .bind(&new_comment.text)
        .fetch_one(self.db.as_ref())
        .await
    }

    async fn list_by_post(&self, post_id: i64) -> Result<Vec<Comment>, sqlx::Error> {
        sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, author_id, text, created_at
            FROM comments
            WHERE post_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(post_id)
        .fetch_all(self.db.as_ref())
        .await
    }
}
