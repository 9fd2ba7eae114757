//! Fetch state persistence.
//!
//! Responsibilities:
//! - Locate, read and write the fetch watermark record between cycles.
//! - Back up corrupt state files before they are replaced.
//!
//! Does NOT handle:
//! - Loading environment variables (see `loader`).
//! - Deciding the watermark value (see the client's fetch module).
//!
//! Invariants:
//! - The watermark is written once, after a successful cycle.
//! - Corrupt state files are backed up before being overwritten.

use std::path::{Path, PathBuf};

mod path;
mod state;

pub use state::{FetchStateStore, LastRun, StateFileError};

/// Renames a corrupt state file to `<name>.corrupt.<unix-seconds>`.
pub(crate) fn create_corrupt_backup(path: &Path) -> Result<PathBuf, std::io::Error> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let backup_path = path.with_extension(format!("corrupt.{}", timestamp));
    std::fs::rename(path, &backup_path)?;

    Ok(backup_path)
}
