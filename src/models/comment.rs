use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: i32,
    pub author_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// A validated comment waiting for the store to assign `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub author_name: String,
    pub body: String,
}
