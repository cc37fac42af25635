pub mod comment;
pub mod vote;

use axum::extract::rejection::JsonRejection;
use serde::Serialize;

use crate::errors::AppError;

pub use comment::{list_comments_handler, record_comment_handler};
pub use vote::{get_statistics_handler, record_vote_handler};

/// `{ "success": true, ...data }`
#[derive(Debug, Serialize)]
pub struct Success<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Success<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Created {
    pub id: i32,
}

pub(crate) fn bad_json(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

pub(crate) fn log_failure(operation: &str, err: &AppError) {
    if err.is_retryable() {
        tracing::error!("{} failed: {}", operation, err);
    } else {
        tracing::debug!("{} rejected: {}", operation, err);
    }
}
