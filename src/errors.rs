use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid rating: must be an integer between 1 and 5")]
    InvalidRating,

    #[error("Missing vote token")]
    MissingToken,

    #[error("A vote has already been recorded for this token")]
    DuplicateVote,

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Env error: {0}")]
    EnvError(String),

    #[error("Server error: {0}")]
    ServerError(#[from] std::io::Error),
}

impl AppError {
    /// Input errors are deterministic and must not be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::StoreUnavailable(_))
    }

    pub fn to_response(&self) -> (StatusCode, String) {
        match self {
            AppError::InvalidRating => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::MissingToken => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::DuplicateVote => (StatusCode::CONFLICT, self.to_string()),
            AppError::MissingField(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            // Driver details stay in the logs.
            AppError::StoreUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Store unavailable, try again later".into(),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::EnvError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::ServerError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unexpected server error".into(),
            ),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::DuplicateVote
            }
            _ => AppError::StoreUnavailable(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::StoreUnavailable(format!("Migration failed: {}", err))
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.to_response();
        (
            status,
            Json(ErrorBody {
                success: false,
                error,
            }),
        )
            .into_response()
    }
}
