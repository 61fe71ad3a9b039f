//! Gift-choice vote recording.
//!
//! A vote is a single insert-only write of the chosen option index. The
//! `Ballot` keeps the "submitted" state so a finished form cannot write
//! again; the `VoteStore` owns the records.

mod ballot;
mod store;

pub use ballot::Ballot;
pub use store::{JsonlVoteStore, VoteStore};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One recorded vote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub choice: i64,
    pub recorded_at: DateTime<Utc>,
}

impl VoteRecord {
    pub fn new(choice: i64) -> Self {
        Self {
            choice,
            recorded_at: Utc::now(),
        }
    }
}

#[derive(Debug, Error)]
pub enum VoteError {
    #[error("a vote has already been submitted")]
    AlreadySubmitted,
    #[error("failed to write vote: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode vote: {0}")]
    Encode(#[from] serde_json::Error),
}
