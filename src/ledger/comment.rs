use std::sync::Arc;

use crate::{
    db::FeedbackStore,
    errors::AppError,
    models::{Comment, NewComment},
};

#[derive(Clone)]
pub struct CommentLedger {
    store: Arc<dyn FeedbackStore>,
}

impl CommentLedger {
    pub fn new(store: Arc<dyn FeedbackStore>) -> Self {
        Self { store }
    }

    /// Both fields are trimmed; whitespace-only counts as missing.
    pub async fn record_comment(&self, author_name: &str, body: &str) -> Result<i32, AppError> {
        let comment = NewComment {
            author_name: required("author_name", author_name)?,
            body: required("body", body)?,
        };

        let id = self.store.insert_comment(&comment).await?;
        tracing::info!("Recorded comment {}", id);
        Ok(id)
    }

    /// Every comment, most recent first.
    pub async fn list_comments(&self) -> Result<Vec<Comment>, AppError> {
        self.store.list_comments().await
    }
}

fn required(field: &'static str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::MissingField(field));
    }
    Ok(trimmed.to_string())
}
