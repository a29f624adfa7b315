use crate::models::users::User;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, username: &str) -> Result<User, sqlx::Error>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error>;
}

pub struct PgUserRepository {
    db: Arc<PgPool>,
}

impl PgUserRepository {
    pub fn new(db: Arc<PgPool>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserRepository {
    async fn insert(&self, username: &str) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username)
            VALUES ($1, $2)
            RETURNING id, username, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .fetch_one(self.db.as_ref())
        .await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, username, created_at FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(self.db.as_ref())
            .await
    }
}
