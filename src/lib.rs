pub mod config;
pub mod db;
pub mod errors;
pub mod http;
pub mod ledger;
mod middleware;
pub mod models;
pub mod state;

use axum::{Router, http::StatusCode};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    config::Config,
    db::{FeedbackStore, PgStore},
    errors::AppError,
    middleware::cors_layer,
    state::AppState,
};

pub fn create_app(state: AppState, allowed_origins: Option<&[String]>) -> Router {
    Router::new()
        .merge(http::create_http_routes(state))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(allowed_origins)),
        )
}

pub async fn start_server() -> Result<(), AppError> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let store = PgStore::connect(&config).await?;
    store.migrate().await?;
    let store: Arc<dyn FeedbackStore> = Arc::new(store);

    let app = create_app(
        AppState::new(store.clone()),
        config.allowed_origins.as_deref(),
    );

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(
        "Feedback server running at http://0.0.0.0:{}",
        config.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Store connection closed");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining requests");
}
