use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        get_statistics_handler, list_comments_handler, record_comment_handler,
        record_vote_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/votes", post(record_vote_handler))
        .route("/api/votes/stats", get(get_statistics_handler))
        .route(
            "/api/comments",
            post(record_comment_handler).get(list_comments_handler),
        )
        .with_state(state)
}
