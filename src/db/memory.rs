use std::collections::HashSet;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::{
    db::FeedbackStore,
    errors::AppError,
    models::{Comment, NewComment, NewVote, VoteTotals},
};

#[derive(Debug)]
struct VoteRow {
    rating: i16,
}

#[derive(Debug, Default)]
struct Tables {
    // Unique index over vote tokens.
    tokens: HashSet<String>,
    votes: Vec<VoteRow>,
    comments: Vec<Comment>,
    next_comment_id: i32,
}

/// In-process store with the same contract as [`PgStore`](super::PgStore).
///
/// Each operation runs under a single lock, so the token uniqueness check and
/// the insert are one atomic step, like a unique index.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackStore for MemoryStore {
    async fn insert_vote(&self, vote: &NewVote) -> Result<i32, AppError> {
        let mut tables = self.tables.lock().await;

        if !tables.tokens.insert(vote.token.clone()) {
            return Err(AppError::DuplicateVote);
        }

        tables.votes.push(VoteRow {
            rating: vote.rating.value(),
        });

        Ok(tables.votes.len() as i32)
    }

    async fn vote_totals(&self) -> Result<VoteTotals, AppError> {
        let tables = self.tables.lock().await;
        Ok(VoteTotals {
            total_votes: tables.votes.len() as i64,
            rating_sum: tables.votes.iter().map(|v| i64::from(v.rating)).sum(),
        })
    }

    async fn insert_comment(&self, comment: &NewComment) -> Result<i32, AppError> {
        let mut tables = self.tables.lock().await;

        tables.next_comment_id += 1;
        let id = tables.next_comment_id;
        tables.comments.push(Comment {
            id,
            author_name: comment.author_name.clone(),
            body: comment.body.clone(),
            created_at: Utc::now(),
        });

        Ok(id)
    }

    async fn list_comments(&self) -> Result<Vec<Comment>, AppError> {
        let mut comments = self.tables.lock().await.comments.clone();
        comments.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(comments)
    }

    async fn close(&self) {}
}
