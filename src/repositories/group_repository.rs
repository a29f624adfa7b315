use crate::models::groups::Group;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

#[async_trait]
pub trait GroupStore: Send + Sync {
    async fn insert(
        &self,
        title: &str,
        slug: &str,
        description: &str,
    ) -> Result<Group, sqlx::Error>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Group>, sqlx::Error>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Group>, sqlx::Error>;
    async fn list(&self) -> Result<Vec<Group>, sqlx::Error>;
}

pub struct PgGroupRepository {
    db: Arc<PgPool>,
}

impl PgGroupRepository {
    pub fn new(db: Arc<PgPool>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GroupStore for PgGroupRepository {
    async fn insert(
        &self,
        title: &str,
        slug: &str,
        description: &str,
    ) -> Result<Group, sqlx::Error> {
        sqlx::query_as::<_, Group>(
            r#"
            INSERT INTO groups (title, slug, description)
            VALUES ($1, $2, $3)
            RETURNING id, title, slug, description
            "#,
        )
        .bind(title)
        .bind(slug)
        .bind(description)
        .fetch_one(self.db.as_ref())
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Group>, sqlx::Error> {
        sqlx::query_as::<_, Group>("SELECT id, title, slug, description FROM groups WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db.as_ref())
            .await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Group>, sqlx::Error> {
        sqlx::query_as::<_, Group>(
            "SELECT id, title, slug, description FROM groups WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(self.db.as_ref())
        .await
    }

    async fn list(&self) -> Result<Vec<Group>, sqlx::Error> {
        sqlx::query_as::<_, Group>("SELECT id, title, slug, description FROM groups ORDER BY id")
            .fetch_all(self.db.as_ref())
            .await
    }
}
