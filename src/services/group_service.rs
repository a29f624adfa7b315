use crate::models::groups::{Group, GroupResponse};
use crate::repositories::group_repository::GroupStore;
use crate::utils::errors::app_error::AppError;
use std::sync::Arc;

pub struct GroupService {
    groups: Arc<dyn GroupStore>,
}

impl GroupService {
    pub fn new(groups: Arc<dyn GroupStore>) -> Self {
        Self { groups }
    }

    pub async fn create_group(
        &self,
        title: &str,
        slug: &str,
        description: &str,
    ) -> Result<GroupResponse, AppError> {
        if title.trim().is_empty() {
            return Err(AppError::Validation {
                field: "title",
                message: "must not be empty".to_string(),
            });
        }
        if slug.trim().is_empty() {
            return Err(AppError::Validation {
                field: "slug",
                message: "must not be empty".to_string(),
            });
        }
        let group = self.groups.insert(title, slug, description).await?;
        Ok(GroupResponse::from(group))
    }

    pub async fn require_by_slug(&self, slug: &str) -> Result<Group, AppError> {
        self.groups
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Group `{}`", slug)))
    }

    pub async fn list_groups(&self) -> Result<Vec<GroupResponse>, AppError> {
        let groups = self.groups.list().await?;
        Ok(groups.into_iter().map(GroupResponse::from).collect())
    }
}
