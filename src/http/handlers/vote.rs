use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    errors::AppError,
    http::handlers::{Created, Success, bad_json, log_failure},
    models::Statistics,
    state::AppState,
};

#[derive(Deserialize)]
pub struct VotePayload {
    /// Integer or integer-like string; validated by the ledger.
    #[serde(default)]
    pub rating: Value,
    pub token: Option<String>,
}

pub async fn record_vote_handler(
    State(state): State<AppState>,
    payload: Result<Json<VotePayload>, JsonRejection>,
) -> Result<Json<Success<Created>>, AppError> {
    let Json(payload) = payload.map_err(bad_json)?;

    let id = state
        .votes
        .record_vote(&payload.rating, payload.token.as_deref().unwrap_or_default())
        .await
        .inspect_err(|e| log_failure("Record vote", e))?;

    Ok(Json(Success::new(Created { id })))
}

pub async fn get_statistics_handler(
    State(state): State<AppState>,
) -> Result<Json<Success<Statistics>>, AppError> {
    let stats = state
        .votes
        .statistics()
        .await
        .inspect_err(|e| log_failure("Get statistics", e))?;

    Ok(Json(Success::new(stats)))
}
