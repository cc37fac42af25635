pub mod comment;
pub mod vote;

pub use comment::CommentLedger;
pub use vote::VoteLedger;
