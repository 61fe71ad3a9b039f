use tracing::warn;

use super::{VoteError, VoteRecord, VoteStore};

/// Submission state of the gift-choice form.
#[derive(Debug, Default)]
pub struct Ballot {
    single_submission: bool,
    submitted: Option<i64>,
}

impl Ballot {
    /// With `single_submission`, only the first successful vote is written.
    pub fn new(single_submission: bool) -> Self {
        Self {
            single_submission,
            submitted: None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted.is_some()
    }

    /// Write `choice` to `store` once. A failed write leaves the ballot open.
    pub fn submit(&mut self, store: &dyn VoteStore, choice: i64) -> Result<VoteRecord, VoteError> {
        if self.single_submission && self.is_submitted() {
            return Err(VoteError::AlreadySubmitted);
        }

        let record = VoteRecord::new(choice);
        if let Err(e) = store.insert(&record) {
            warn!(choice, error = %e, "vote write failed");
            return Err(e);
        }

        self.submitted = Some(choice);
        Ok(record)
    }
}
