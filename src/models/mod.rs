pub mod comment;
pub mod vote;

pub use comment::{Comment, NewComment};
pub use vote::{NewVote, Rating, Statistics, VoteTotals};
