use std::time::Duration;

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// `None` allows any origin.
    pub allowed_origins: Option<Vec<String>>,
    pub max_connections: u32,
    pub store_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::EnvError("DATABASE_URL must be set".into()))?;

        let allowed_origins = lookup("ALLOWED_ORIGINS").and_then(|s| {
            let origins = s
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect::<Vec<_>>();
            (!origins.is_empty()).then_some(origins)
        });

        Ok(Self {
            database_url,
            port: parse_or("PORT", &lookup, 3001)?,
            allowed_origins,
            max_connections: parse_or("DATABASE_MAX_CONNECTIONS", &lookup, 5)?,
            store_timeout: Duration::from_secs(parse_or("STORE_TIMEOUT_SECS", &lookup, 5)?),
        })
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| AppError::EnvError(format!("{} has an invalid value: {}", key, raw))),
        None => Ok(default),
    }
}
