use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::info;

use super::{VoteError, VoteRecord};

/// Insert-only record store.
pub trait VoteStore: Send + Sync {
    fn insert(&self, record: &VoteRecord) -> Result<(), VoteError>;
}

/// Appends each vote as one JSON line to a file.
pub struct JsonlVoteStore {
    path: PathBuf,
    // Serializes appends so lines never interleave.
    write_lock: Mutex<()>,
}

impl JsonlVoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VoteStore for JsonlVoteStore {
    fn insert(&self, record: &VoteRecord) -> Result<(), VoteError> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&line)?;
        file.flush()?;

        info!(choice = record.choice, path = %self.path.display(), "vote recorded");
        Ok(())
    }
}
