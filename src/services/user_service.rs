use crate::models::users::{User, UserResponse};
use crate::repositories::user_repository::UserStore;
use crate::utils::errors::app_error::AppError;
use std::sync::Arc;

pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub async fn register(&self, username: &str) -> Result<UserResponse, AppError> {
        if username.trim().is_empty() {
            return Err(AppError::Validation {
                field: "username",
                message: "must not be empty".to_string(),
            });
        }
        let user = self.users.insert(username).await?;
        Ok(UserResponse::from(user))
    }

    /// Resolves a username or fails with `NotFound`, for views that 404 on
    /// unknown profiles.
    pub async fn require_by_username(&self, username: &str) -> Result<User, AppError> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User `{}`", username)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::MemoryStore;

    #[tokio::test]
    async fn register_and_resolve() {
        let store = Arc::new(MemoryStore::new());
        let service = UserService::new(store);
        let user = service.register("alice").await.unwrap();
        assert_eq!(user.username, "alice");

        let found = service.require_by_username("alice").await.unwrap();
        assert_eq!(found.id, user.id);
        assert!(matches!(
            service.require_by_username("bob").await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn blank_username_fails_validation() {
        let store = Arc::new(MemoryStore::new());
        let service = UserService::new(store);
        let err = service.register("  ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation { field: "username", .. }));
    }
}
