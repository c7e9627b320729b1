//! Progress file persistence.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use super::ProgressState;
use crate::error::{Result, TrackerError};

/// Reads and writes the JSON progress file.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    /// Creates a store for the given file.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load state, substituting a fresh one started at `now` when the file is
    /// missing or cannot be parsed.
    pub fn load(&self, now: NaiveDateTime) -> ProgressState {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no progress file, starting fresh");
                return ProgressState::new(now);
            }
            Err(e) => {
                warn!(
                    "Unreadable progress file at {}: {}. Starting fresh.",
                    self.path.display(),
                    e
                );
                return ProgressState::new(now);
            }
        };

        match ProgressState::from_json(&contents, now) {
            Ok(state) => state,
            Err(e) => {
                warn!(
                    "Corrupted progress file at {}: {}. Starting fresh.",
                    self.path.display(),
                    e
                );
                ProgressState::new(now)
            }
        }
    }

    /// Overwrite the file with the full state.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, state: &ProgressState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| self.write_error(source))?;
            }
        }

        let json = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, json).map_err(|source| self.write_error(source))?;
        debug!(path = %self.path.display(), entries = state.history.len(), "saved progress");
        Ok(())
    }

    fn write_error(&self, source: std::io::Error) -> TrackerError {
        TrackerError::ProgressWrite {
            path: self.path.clone(),
            source,
        }
    }
}
