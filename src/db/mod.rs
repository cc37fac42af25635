pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::{
    errors::AppError,
    models::{Comment, NewComment, NewVote, VoteTotals},
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Durable storage for votes and comments.
///
/// `insert_vote` must reject a second vote for the same token atomically,
/// reporting it as [`AppError::DuplicateVote`]. Callers never check for an
/// existing token first.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn insert_vote(&self, vote: &NewVote) -> Result<i32, AppError>;

    /// Vote count and rating sum, read in a single query.
    async fn vote_totals(&self) -> Result<VoteTotals, AppError>;

    async fn insert_comment(&self, comment: &NewComment) -> Result<i32, AppError>;

    /// All comments, newest `created_at` first, ties broken by newest id.
    async fn list_comments(&self) -> Result<Vec<Comment>, AppError>;

    async fn close(&self);
}
