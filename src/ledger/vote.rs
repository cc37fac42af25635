use std::sync::Arc;

use serde_json::Value;

use crate::{
    db::FeedbackStore,
    errors::AppError,
    models::{NewVote, Rating, Statistics},
};

/// One vote per token, and aggregate statistics over all votes.
#[derive(Clone)]
pub struct VoteLedger {
    store: Arc<dyn FeedbackStore>,
}

impl VoteLedger {
    pub fn new(store: Arc<dyn FeedbackStore>) -> Self {
        Self { store }
    }

    /// Records a vote and returns its id.
    ///
    /// Input is validated before the store is touched. A repeated token is
    /// reported by the store's uniqueness constraint as `DuplicateVote`.
    pub async fn record_vote(&self, rating: &Value, token: &str) -> Result<i32, AppError> {
        let rating = Rating::parse(rating)?;
        if token.is_empty() {
            return Err(AppError::MissingToken);
        }

        let vote = NewVote {
            rating,
            token: token.to_string(),
        };

        let id = self.store.insert_vote(&vote).await.inspect_err(|e| {
            if matches!(e, AppError::DuplicateVote) {
                tracing::warn!("Rejected duplicate vote");
            }
        })?;

        tracing::info!("Recorded vote {} with rating {}", id, rating.value());
        Ok(id)
    }

    pub async fn statistics(&self) -> Result<Statistics, AppError> {
        let totals = self.store.vote_totals().await?;
        Ok(Statistics::from(totals))
    }
}
