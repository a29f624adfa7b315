use crate::models::users::UserResponse;
use crate::repositories::follow_repository::FollowStore;
use crate::repositories::user_repository::UserStore;
use crate::utils::errors::app_error::AppError;
use std::sync::Arc;
use uuid::Uuid;

/// The follow graph. Self-follows and duplicate edges are suppressed at the
/// edge-creation boundary rather than by a separate check, so concurrent
/// duplicate requests collapse into one edge at the store's uniqueness
/// constraint.
pub struct FollowService {
    follows: Arc<dyn FollowStore>,
    users: Arc<dyn UserStore>,
}

impl FollowService {
    pub fn new(follows: Arc<dyn FollowStore>, users: Arc<dyn UserStore>) -> Self {
        Self { follows, users }
    }

    /// Follow the author named `username`. A self-follow is a silent no-op,
    /// as is following someone already followed.
    pub async fn follow(&self, actor: Option<Uuid>, username: &str) -> Result<(), AppError> {
        let follower = actor.ok_or(AppError::Unauthenticated)?;
        let author = self.resolve(username).await?;
        if author == follower {
            return Ok(());
        }
        self.follows.insert(follower, author).await?;
        Ok(())
    }

    /// Remove the edge if present; never errors on a missing edge.
    pub async fn unfollow(&self, actor: Option<Uuid>, username: &str) -> Result<(), AppError> {
        let follower = actor.ok_or(AppError::Unauthenticated)?;
        let author = self.resolve(username).await?;
        self.follows.delete(follower, author).await?;
        Ok(())
    }

    pub async fn is_following(&self, follower: Uuid, author: Uuid) -> Result<bool, AppError> {
        Ok(self.follows.exists(follower, author).await?)
    }

    pub async fn followers(&self, username: &str) -> Result<Vec<UserResponse>, AppError> {
        let author = self.resolve(username).await?;
        let followers = self.follows.list_followers(author).await?;
        Ok(followers.into_iter().map(UserResponse::from).collect())
    }

    pub async fn following(&self, username: &str) -> Result<Vec<UserResponse>, AppError> {
        let follower = self.resolve(username).await?;
        let following = self.follows.list_following(follower).await?;
        Ok(following.into_iter().map(UserResponse::from).collect())
    }

    async fn resolve(&self, username: &str) -> Result<Uuid, AppError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User `{}`", username)))?;
        Ok(user.id)
    }
}
