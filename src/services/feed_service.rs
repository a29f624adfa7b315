use crate::models::posts::Post;
use crate::repositories::group_repository::GroupStore;
use crate::repositories::post_repository::PostStore;
use crate::repositories::user_repository::UserStore;
use crate::utils::errors::app_error::AppError;
use std::sync::Arc;
use uuid::Uuid;

/// Which slice of the post stream a view wants.
#[derive(Clone, Debug)]
pub enum FeedFilter {
    All,
    ByGroup(String),
    ByAuthor(String),
    Following(Uuid),
}

impl FeedFilter {
    /// Stable key fragment for the page cache.
    pub fn cache_key(&self) -> String {
        match self {
            FeedFilter::All => "all".to_string(),
            FeedFilter::ByGroup(slug) => format!("group:{}", slug),
            FeedFilter::ByAuthor(username) => format!("author:{}", username),
            FeedFilter::Following(viewer) => format!("following:{}", viewer),
        }
    }
}

/// Composes ordered post lists for the index, group, profile and following
/// views. Pure read; ordering is always newest-first with the insertion
/// sequence as tie-break so it is total and deterministic.
pub struct FeedService {
    posts: Arc<dyn PostStore>,
    groups: Arc<dyn GroupStore>,
    users: Arc<dyn UserStore>,
}

impl FeedService {
    pub fn new(
        posts: Arc<dyn PostStore>,
        groups: Arc<dyn GroupStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            posts,
            groups,
            users,
        }
    }

    pub async fn feed(&self, filter: &FeedFilter) -> Result<Vec<Post>, AppError> {
        let mut posts = match filter {
            FeedFilter::All => self.posts.list_all().await?,
            FeedFilter::ByGroup(slug) => {
                let group = self
                    .groups
                    .find_by_slug(slug)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Group `{}`", slug)))?;
                self.posts.list_by_group(group.id).await?
            }
            FeedFilter::ByAuthor(username) => {
                let author = self
                    .users
                    .find_by_username(username)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("User `{}`", username)))?;
                self.posts.list_by_author(author.id).await?
            }
            // an empty follow set is an empty feed, not an error
            FeedFilter::Following(viewer) => self.posts.list_followed(*viewer).await?,
        };

        // the stores already order their results; enforcing it here keeps
        // the invariant independent of any one implementation
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(posts)
    }
}
