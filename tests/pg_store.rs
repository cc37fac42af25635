//! Runs against a real PostgreSQL when `DATABASE_URL` is set; skipped otherwise.

use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;
use portfolio_feedback::{
    config::Config,
    db::{FeedbackStore, PgStore},
    errors::AppError,
    ledger::{CommentLedger, VoteLedger},
};
use serde_json::json;

async fn connect() -> Option<Arc<PgStore>> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping Postgres test");
        return None;
    };

    let config = Config::from_lookup(|key| (key == "DATABASE_URL").then(|| url.clone()))
        .expect("config from DATABASE_URL");
    let store = PgStore::connect(&config).await.expect("connect to Postgres");
    store.migrate().await.expect("run migrations");
    Some(Arc::new(store))
}

fn fresh_token(prefix: &str) -> String {
    format!(
        "{}-{}",
        prefix,
        Utc::now().timestamp_nanos_opt().unwrap_or_default()
    )
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_same_token_hits_unique_constraint_once() {
    let Some(store) = connect().await else {
        return;
    };
    let votes = VoteLedger::new(store.clone());
    let token = fresh_token("race");
    let before = store.vote_totals().await.unwrap().total_votes;

    let attempts = (0..8).map(|i| {
        let votes = votes.clone();
        let token = token.clone();
        tokio::spawn(async move { votes.record_vote(&json!(i % 5 + 1), &token).await })
    });
    let results = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.unwrap())
        .collect::<Vec<_>>();

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert_eq!(
        results
            .iter()
            .filter(|r| matches!(r, Err(AppError::DuplicateVote)))
            .count(),
        7
    );
    assert!(store.vote_totals().await.unwrap().total_votes > before);

    store.close().await;
}

#[tokio::test]
async fn test_sequential_duplicate_is_rejected_by_store() {
    let Some(store) = connect().await else {
        return;
    };
    let votes = VoteLedger::new(store.clone());
    let token = fresh_token("repeat");

    let first = votes.record_vote(&json!(4), &token).await.unwrap();
    assert!(first > 0);

    let err = votes.record_vote(&json!(2), &token).await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateVote));

    store.close().await;
}

#[tokio::test]
async fn test_new_comment_is_listed_first() {
    let Some(store) = connect().await else {
        return;
    };
    let comments = CommentLedger::new(store.clone());

    comments.record_comment("Bruno", "Nice projects").await.unwrap();
    let id = comments.record_comment("Ana", "Great site!").await.unwrap();

    let listed = comments.list_comments().await.unwrap();
    assert_eq!(listed[0].id, id);
    assert!(
        listed
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at)
    );

    store.close().await;
}
