#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use portfolio_feedback::{
    db::{FeedbackStore, MemoryStore},
    errors::AppError,
    models::{Comment, NewComment, NewVote, VoteTotals},
    state::AppState,
};

pub fn memory_state() -> (Arc<MemoryStore>, AppState) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone());
    (store, state)
}

/// A store whose every call fails as if the database were unreachable.
pub struct UnreachableStore;

#[async_trait]
impl FeedbackStore for UnreachableStore {
    async fn insert_vote(&self, _vote: &NewVote) -> Result<i32, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn vote_totals(&self) -> Result<VoteTotals, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn insert_comment(&self, _comment: &NewComment) -> Result<i32, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn list_comments(&self) -> Result<Vec<Comment>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn close(&self) {}
}

pub fn unreachable_state() -> AppState {
    AppState::new(Arc::new(UnreachableStore))
}
