use crate::models::posts::{NewPost, Post, PostChanges};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

const POST_COLUMNS: &str = "id, author_id, group_id, text, image_uri, created_at";

#[async_trait]
pub trait PostStore: Send + Sync {
    async fn insert(&self, new_post: NewPost) -> Result<Post, sqlx::Error>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, sqlx::Error>;
    async fn update(&self, id: i64, changes: PostChanges) -> Result<Post, sqlx::Error>;
    /// Hard delete; dependent comments go with the post.
    async fn delete(&self, id: i64) -> Result<(), sqlx::Error>;
    async fn list_all(&self) -> Result<Vec<Post>, sqlx::Error>;
    async fn list_by_group(&self, group_id: i64) -> Result<Vec<Post>, sqlx::Error>;
    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, sqlx::Error>;
    /// Posts by every author the viewer follows.
    async fn list_followed(&self, viewer_id: Uuid) -> Result<Vec<Post>, sqlx::Error>;
    async fn count_by_author(&self, author_id: Uuid) -> Result<i64, sqlx::Error>;
}

pub struct PgPostRepository {
    db: Arc<PgPool>,
}

impl PgPostRepository {
    pub fn new(db: Arc<PgPool>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostStore for PgPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<Post, sqlx::Error> {
        sqlx::query_as::<_, Post>(&format!(
            r#"
            INSERT INTO posts (author_id, group_id, text, image_uri)
            VALUES ($1, $2, $3, $4)
            RETURNING {POST_COLUMNS}
            "#,
        ))
        .bind(new_post.author_id)
        .bind(new_post.group_id)
        .bind(&new_post.text)
        .bind(&new_post.image_uri)
        .fetch_one(self.db.as_ref())
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(&format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.db.as_ref())
            .await
    }

    async fn update(&self, id: i64, changes: PostChanges) -> Result<Post, sqlx::Error> {
        sqlx::query_as::<_, Post>(&format!(
            r#"
            UPDATE posts
            SET text = $1, group_id = $2, image_uri = $3
            WHERE id = $4
            RETURNING {POST_COLUMNS}
            "#,
        ))
        .bind(&changes.text)
        .bind(changes.group_id)
        .bind(&changes.image_uri)
        .bind(id)
        .fetch_one(self.db.as_ref())
        .await
    }

    async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        // comments carry ON DELETE CASCADE on post_id
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(self.db.as_ref())
            .await?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.db.as_ref())
        .await
    }

    async fn list_by_group(&self, group_id: i64) -> Result<Vec<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(&format!(
            r#"
            SELECT {POST_COLUMNS} FROM posts
            WHERE group_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        ))
        .bind(group_id)
        .fetch_all(self.db.as_ref())
        .await
    }

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(&format!(
            r#"
            SELECT {POST_COLUMNS} FROM posts
            WHERE author_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        ))
        .bind(author_id)
        .fetch_all(self.db.as_ref())
        .await
    }

    async fn list_followed(&self, viewer_id: Uuid) -> Result<Vec<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(&format!(
            r#"
            SELECT p.id, p.author_id, p.group_id, p.text, p.image_uri, p.created_at
            FROM posts p
            INNER JOIN follows f ON f.followed_id = p.author_id
            WHERE f.follower_id = $1
            ORDER BY p.created_at DESC, p.id DESC
            "#,
        ))
        .bind(viewer_id)
        .fetch_all(self.db.as_ref())
        .await
    }

    async fn count_by_author(&self, author_id: Uuid) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(self.db.as_ref())
            .await
    }
}
