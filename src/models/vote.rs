use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::errors::AppError;

pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

/// A rating that is known to lie in `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(i16);

impl Rating {
    pub fn value(self) -> i16 {
        self.0
    }

    /// Accepts a JSON integer or a string holding one, e.g. `4` or `"4"`.
    /// Fractional numbers, booleans and null are rejected.
    pub fn parse(raw: &Value) -> Result<Self, AppError> {
        let n = match raw {
            Value::Number(n) => n.as_i64().ok_or(AppError::InvalidRating)?,
            Value::String(s) => s.trim().parse::<i64>().map_err(|_| AppError::InvalidRating)?,
            _ => return Err(AppError::InvalidRating),
        };
        Rating::try_from(n)
    }
}

impl TryFrom<i64> for Rating {
    type Error = AppError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        if (MIN_RATING as i64..=MAX_RATING as i64).contains(&n) {
            Ok(Rating(n as i16))
        } else {
            Err(AppError::InvalidRating)
        }
    }
}

impl From<Rating> for i16 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[derive(Debug, Clone)]
pub struct NewVote {
    pub rating: Rating,
    pub token: String,
}

/// Raw aggregate read from the store in one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromRow)]
pub struct VoteTotals {
    pub total_votes: i64,
    pub rating_sum: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_votes: i64,
    pub average_rating: f64,
}

impl From<VoteTotals> for Statistics {
    fn from(totals: VoteTotals) -> Self {
        Statistics {
            total_votes: totals.total_votes,
            average_rating: average_to_cents(totals.rating_sum, totals.total_votes) as f64 / 100.0,
        }
    }
}

/// Mean of `sum / count` in hundredths, rounded half away from zero.
/// Done in integers so the result does not depend on float representation.
fn average_to_cents(sum: i64, count: i64) -> i64 {
    if count <= 0 {
        return 0;
    }
    let scaled = sum as i128 * 100;
    let count = count as i128;
    let half_up = (scaled.abs() * 2 + count) / (count * 2);
    (half_up * scaled.signum()) as i64
}
