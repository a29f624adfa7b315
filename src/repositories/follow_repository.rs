use crate::models::users::User;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait FollowStore: Send + Sync {
    /// Creates the edge if absent. The `(follower_id, followed_id)`
    /// uniqueness constraint absorbs concurrent duplicates, so a second
    /// insert is a no-op rather than an error.
    async fn insert(&self, follower_id: Uuid, followed_id: Uuid) -> Result<(), sqlx::Error>;
    async fn delete(&self, follower_id: Uuid, followed_id: Uuid) -> Result<(), sqlx::Error>;
    async fn exists(&self, follower_id: Uuid, followed_id: Uuid) -> Result<bool, sqlx::Error>;
    async fn list_followers(&self, user_id: Uuid) -> Result<Vec<User>, sqlx::Error>;
    async fn list_following(&self, user_id: Uuid) -> Result<Vec<User>, sqlx::Error>;
}

pub struct PgFollowRepository {
    db: Arc<PgPool>,
}

impl PgFollowRepository {
    pub fn new(db: Arc<PgPool>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FollowStore for PgFollowRepository {
    async fn insert(&self, follower_id: Uuid, followed_id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO follows (follower_id, followed_id)
            VALUES ($1, $2)
            ON CONFLICT (follower_id, followed_id) DO NOTHING
            "#,
        )
        .bind(follower_id)
        .bind(followed_id)
        .execute(self.db.as_ref())
        .await?;
        Ok(())
    }

    async fn delete(&self, follower_id: Uuid, followed_id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followed_id = $2")
            .bind(follower_id)
            .bind(followed_id)
            .execute(self.db.as_ref())
            .await?;
        Ok(())
    }

    async fn exists(&self, follower_id: Uuid, followed_id: Uuid) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM follows WHERE follower_id = $1 AND followed_id = $2)",
        )
        .bind(follower_id)
        .bind(followed_id)
        .fetch_one(self.db.as_ref())
        .await
    }

    async fn list_followers(&self, user_id: Uuid) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.username, u.created_at
            FROM users u
            INNER JOIN follows f ON u.id = f.follower_id
            WHERE f.followed_id = $1
            ORDER BY u.username
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.as_ref())
        .await
    }

    async fn list_following(&self, user_id: Uuid) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.username, u.created_at
            FROM users u
            INNER JOIN follows f ON u.id = f.followed_id
            WHERE f.follower_id = $1
            ORDER BY u.username
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.as_ref())
        .await
    }
}
