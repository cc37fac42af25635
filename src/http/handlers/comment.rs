use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    errors::AppError,
    http::handlers::{Created, Success, bad_json, log_failure},
    models::Comment,
    state::AppState,
};

#[derive(Deserialize)]
pub struct CommentPayload {
    pub author_name: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CommentList {
    pub comments: Vec<Comment>,
}

pub async fn record_comment_handler(
    State(state): State<AppState>,
    payload: Result<Json<CommentPayload>, JsonRejection>,
) -> Result<Json<Success<Created>>, AppError> {
    let Json(payload) = payload.map_err(bad_json)?;

    let id = state
        .comments
        .record_comment(
            payload.author_name.as_deref().unwrap_or_default(),
            payload.body.as_deref().unwrap_or_default(),
        )
        .await
        .inspect_err(|e| log_failure("Record comment", e))?;

    Ok(Json(Success::new(Created { id })))
}

pub async fn list_comments_handler(
    State(state): State<AppState>,
) -> Result<Json<Success<CommentList>>, AppError> {
    let comments = state
        .comments
        .list_comments()
        .await
        .inspect_err(|e| log_failure("List comments", e))?;

    Ok(Json(Success::new(CommentList { comments })))
}
