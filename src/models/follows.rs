use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Directed edge: `follower_id` sees posts by `followed_id` in the
/// following feed. At most one edge per pair; never self-referential.
#[derive(Clone, Debug, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Follow {
    pub follower_id: Uuid,
    pub followed_id: Uuid,
    pub created_at: DateTime<Utc>,
}
