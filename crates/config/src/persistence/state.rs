//! Fetch state (last-run record) storage.
//!
//! Responsibilities:
//! - Define the persisted `LastRun` record handed between fetch cycles.
//! - Read and atomically write it to a JSON file.
//!
//! Does NOT handle:
//! - Interpreting `last_fetch` as a timestamp (the client's fetch module does that).
//!
//! Invariants:
//! - A missing file is an empty `LastRun`, not an error.
//! - A corrupt file is backed up and treated as empty so the next cycle can proceed.
//! - Writes are atomic (temp file + rename).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::create_corrupt_backup;
use super::path::default_state_path;
use crate::types::FetchConfig;

/// Host-persisted record of the last successful fetch cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastRun {
    /// Watermark of the last cycle, as epoch milliseconds text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_fetch: Option<String>,
}

/// Errors reading or writing the fetch state file.
#[derive(Error, Debug)]
pub enum StateFileError {
    #[error("Failed to read fetch state at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write fetch state at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize fetch state: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Unable to determine data directory: {0}")]
    DataDirUnavailable(String),
}

/// JSON-file backed store for [`LastRun`].
#[derive(Debug, Clone)]
pub struct FetchStateStore {
    path: PathBuf,
}

impl FetchStateStore {
    /// Store at an explicit path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the configured path, or the platform data directory.
    pub fn from_config(fetch: &FetchConfig) -> Result<Self, StateFileError> {
        match &fetch.state_path {
            Some(path) => Ok(Self::new(path.clone())),
            None => default_state_path()
                .map(Self::new)
                .map_err(|e| StateFileError::DataDirUnavailable(e.to_string())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the last-run record.
    pub fn load(&self) -> Result<LastRun, StateFileError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No fetch state yet");
                return Ok(LastRun::default());
            }
            Err(source) => {
                return Err(StateFileError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        match serde_json::from_str::<LastRun>(&content) {
            Ok(run) => Ok(run),
            Err(e) => {
                match create_corrupt_backup(&self.path) {
                    Ok(backup) => tracing::warn!(
                        path = %self.path.display(),
                        backup = %backup.display(),
                        error = %e,
                        "Corrupt fetch state backed up; starting from the lookback window"
                    ),
                    Err(backup_err) => tracing::warn!(
                        path = %self.path.display(),
                        error = %e,
                        backup_error = %backup_err,
                        "Corrupt fetch state could not be backed up; starting from the lookback window"
                    ),
                }
                Ok(LastRun::default())
            }
        }
    }

    /// Atomically persist the last-run record.
    pub fn save(&self, run: &LastRun) -> Result<(), StateFileError> {
        let write_err = |source| StateFileError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let temp_path = self.path.with_extension("tmp");
        let content = serde_json::to_string_pretty(run)?;
        std::fs::write(&temp_path, content).map_err(write_err)?;
        std::fs::rename(&temp_path, &self.path).map_err(write_err)?;

        tracing::debug!(path = %self.path.display(), last_fetch = ?run.last_fetch, "Fetch state saved");
        Ok(())
    }
}
