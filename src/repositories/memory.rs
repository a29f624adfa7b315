//! In-memory implementation of every store trait, used as a test double in
//! place of Postgres. Mirrors the SQL ordering rules exactly.

use crate::models::comments::{Comment, NewComment};
use crate::models::follows::Follow;
use crate::models::groups::Group;
use crate::models::posts::{NewPost, Post, PostChanges};
use crate::models::users::User;
use crate::repositories::comment_repository::CommentStore;
use crate::repositories::follow_repository::FollowStore;
use crate::repositories::group_repository::GroupStore;
use crate::repositories::post_repository::PostStore;
use crate::repositories::user_repository::UserStore;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
struct State {
    users: Vec<User>,
    groups: Vec<Group>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    follows: Vec<Follow>,
    next_group_id: i64,
    next_post_id: i64,
    next_comment_id: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comment_count(&self, post_id: i64) -> usize {
        let state = self.state.lock().unwrap();
        state.comments.iter().filter(|c| c.post_id == post_id).count()
    }

    pub fn follow_edge_count(&self) -> usize {
        self.state.lock().unwrap().follows.len()
    }
}

fn newest_first(posts: &mut Vec<Post>) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert(&self, username: &str) -> Result<User, sqlx::Error> {
        let mut state = self.state.lock().unwrap();
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            created_at: Utc::now(),
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.username == username).cloned())
    }
}

#[async_trait]
impl GroupStore for MemoryStore {
    async fn insert(
        &self,
        title: &str,
        slug: &str,
        description: &str,
    ) -> Result<Group, sqlx::Error> {
        let mut state = self.state.lock().unwrap();
        state.next_group_id += 1;
        let group = Group {
            id: state.next_group_id,
            title: title.to_string(),
            slug: slug.to_string(),
            description: description.to_string(),
        };
        state.groups.push(group.clone());
        Ok(group)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Group>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        Ok(state.groups.iter().find(|g| g.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Group>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        Ok(state.groups.iter().find(|g| g.slug == slug).cloned())
    }

    async fn list(&self) -> Result<Vec<Group>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        let mut groups = state.groups.clone();
        groups.sort_by_key(|g| g.id);
        Ok(groups)
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn insert(&self, new_post: NewPost) -> Result<Post, sqlx::Error> {
        let mut state = self.state.lock().unwrap();
        state.next_post_id += 1;
        let post = Post {
            id: state.next_post_id,
            author_id: new_post.author_id,
            group_id: new_post.group_id,
            text: new_post.text,
            image_uri: new_post.image_uri,
            created_at: Utc::now(),
        };
        state.posts.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        Ok(state.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn update(&self, id: i64, changes: PostChanges) -> Result<Post, sqlx::Error> {
        let mut state = self.state.lock().unwrap();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(sqlx::Error::RowNotFound)?;
        post.text = changes.text;
        post.group_id = changes.group_id;
        post.image_uri = changes.image_uri;
        Ok(post.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        let mut state = self.state.lock().unwrap();
        state.posts.retain(|p| p.id != id);
        state.comments.retain(|c| c.post_id != id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Post>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        let mut posts = state.posts.clone();
        newest_first(&mut posts);
        Ok(posts)
    }

    async fn list_by_group(&self, group_id: i64) -> Result<Vec<Post>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        let mut posts: Vec<Post> = state
            .posts
            .iter()
            .filter(|p| p.group_id == Some(group_id))
            .cloned()
            .collect();
        newest_first(&mut posts);
        Ok(posts)
    }

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        let mut posts: Vec<Post> = state
            .posts
            .iter()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect();
        newest_first(&mut posts);
        Ok(posts)
    }

    async fn list_followed(&self, viewer_id: Uuid) -> Result<Vec<Post>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        let followed: Vec<Uuid> = state
            .follows
            .iter()
            .filter(|f| f.follower_id == viewer_id)
            .map(|f| f.followed_id)
            .collect();
        let mut posts: Vec<Post> = state
            .posts
            .iter()
            .filter(|p| followed.contains(&p.author_id))
            .cloned()
            .collect();
        newest_first(&mut posts);
        Ok(posts)
    }

    async fn count_by_author(&self, author_id: Uuid) -> Result<i64, sqlx::Error> {
        let state = self.state.lock().unwrap();
        Ok(state.posts.iter().filter(|p| p.author_id == author_id).count() as i64)
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn insert(&self, new_comment: NewComment) -> Result<Comment, sqlx::Error> {
        let mut state = self.state.lock().unwrap();
        state.next_comment_id += 1;
        let comment = Comment {
            id: state.next_comment_id,
            post_id: new_comment.post_id,
            author_id: new_comment.author_id,
            text: new_comment.text,
            created_at: Utc::now(),
        };
        state.comments.push(comment.clone());
        Ok(comment)
    }

    async fn list_by_post(&self, post_id: i64) -> Result<Vec<Comment>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        let mut comments: Vec<Comment> = state
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(comments)
    }
}

#[async_trait]
impl FollowStore for MemoryStore {
    async fn insert(&self, follower_id: Uuid, followed_id: Uuid) -> Result<(), sqlx::Error> {
        let mut state = self.state.lock().unwrap();
        let exists = state
            .follows
            .iter()
            .any(|f| f.follower_id == follower_id && f.followed_id == followed_id);
        if !exists {
            state.follows.push(Follow {
                follower_id,
                followed_id,
                created_at: Utc::now(),
            });
        }
        Ok(())
    }

    async fn delete(&self, follower_id: Uuid, followed_id: Uuid) -> Result<(), sqlx::Error> {
        let mut state = self.state.lock().unwrap();
        state
            .follows
            .retain(|f| !(f.follower_id == follower_id && f.followed_id == followed_id));
        Ok(())
    }

    async fn exists(&self, follower_id: Uuid, followed_id: Uuid) -> Result<bool, sqlx::Error> {
        let state = self.state.lock().unwrap();
        Ok(state
            .follows
            .iter()
            .any(|f| f.follower_id == follower_id && f.followed_id == followed_id))
    }

    async fn list_followers(&self, user_id: Uuid) -> Result<Vec<User>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        let follower_ids: Vec<Uuid> = state
            .follows
            .iter()
            .filter(|f| f.followed_id == user_id)
            .map(|f| f.follower_id)
            .collect();
        let mut users: Vec<User> = state
            .users
            .iter()
            .filter(|u| follower_ids.contains(&u.id))
            .cloned()
            .collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }

    async fn list_following(&self, user_id: Uuid) -> Result<Vec<User>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        let followed_ids: Vec<Uuid> = state
            .follows
            .iter()
            .filter(|f| f.follower_id == user_id)
            .map(|f| f.followed_id)
            .collect();
        let mut users: Vec<User> = state
            .users
            .iter()
            .filter(|u| followed_ids.contains(&u.id))
            .cloned()
            .collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }
}
