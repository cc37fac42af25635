use std::{str::FromStr, time::Duration};

use async_trait::async_trait;
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};

use crate::{
    config::Config,
    db::FeedbackStore,
    errors::AppError,
    models::{Comment, NewComment, NewVote, VoteTotals},
};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connects with bounded waits: acquiring a connection and every statement
    /// give up after `config.store_timeout`.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        let timeout_ms = config.store_timeout.as_millis().to_string();
        let options = PgConnectOptions::from_str(&config.database_url)
            .map_err(|e| AppError::EnvError(format!("Invalid DATABASE_URL: {}", e)))?
            .options([("statement_timeout", timeout_ms.as_str())]);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.store_timeout)
            .idle_timeout(Duration::from_secs(600))
            .connect_with(options)
            .await
            .map_err(|e| AppError::StoreUnavailable(format!("Failed to connect: {}", e)))?;

        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations applied");
        Ok(())
    }
}

#[async_trait]
impl FeedbackStore for PgStore {
    async fn insert_vote(&self, vote: &NewVote) -> Result<i32, AppError> {
        // The UNIQUE constraint on token is the only duplicate check.
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO votes (rating, token)
            VALUES ($1, $2)
            RETURNING id",
        )
        .bind(vote.rating.value())
        .bind(&vote.token)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn vote_totals(&self) -> Result<VoteTotals, AppError> {
        let totals = sqlx::query_as::<_, VoteTotals>(
            "SELECT COUNT(*) AS total_votes,
                COALESCE(SUM(rating), 0)::BIGINT AS rating_sum
			FROM votes",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(totals)
    }

    async fn insert_comment(&self, comment: &NewComment) -> Result<i32, AppError> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO comments (author_name, body)
            VALUES ($1, $2)
            RETURNING id",
        )
        .bind(&comment.author_name)
        .bind(&comment.body)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list_comments(&self) -> Result<Vec<Comment>, AppError> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT id, author_name, body, created_at
			FROM comments
			ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
