use std::sync::Arc;

use crate::{
    db::FeedbackStore,
    ledger::{CommentLedger, VoteLedger},
};

#[derive(Clone)]
pub struct AppState {
    pub votes: VoteLedger,
    pub comments: CommentLedger,
}

impl AppState {
    pub fn new(store: Arc<dyn FeedbackStore>) -> Self {
        Self {
            votes: VoteLedger::new(store.clone()),
            comments: CommentLedger::new(store),
        }
    }
}
