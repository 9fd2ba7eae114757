//! Path helpers for the fetch state file.
//!
//! Responsibilities:
//! - Determine the default fetch state path.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::FETCH_STATE_FILE_NAME;

/// Returns the default path to the fetch state file.
///
/// - Linux: `~/.local/share/grafana-connector/last_run.json`
/// - macOS: `~/Library/Application Support/grafana-connector/last_run.json`
/// - Windows: `%AppData%\grafana-connector\data\last_run.json`
pub(crate) fn default_state_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", "grafana-connector")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.data_dir().join(FETCH_STATE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_path_matches_expected_project_dirs() {
        let expected = directories::ProjectDirs::from("", "", "grafana-connector")
            .unwrap()
            .data_dir()
            .join("last_run.json");

        assert_eq!(default_state_path().unwrap(), expected);
    }
}
