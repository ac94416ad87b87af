//! JSON snapshot persistence for the CLI.
//!
//! The core keeps the forest in memory; the CLI is the persistence
//! collaborator. Between invocations the forest lives as the ordered record
//! list from [`trellis_core::snapshot`], written to a single JSON file.

use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use log::debug;
use trellis_core::{GoalStore, Snapshot};

/// Returns the default data file path following the XDG Base Directory
/// specification: `$XDG_DATA_HOME/trellis/goals.json` or
/// `~/.local/share/trellis/goals.json`.
pub fn default_data_file() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix("trellis")
        .place_data_file("goals.json")
        .context("Failed to resolve XDG data directory")
}

/// Loads a store from the data file.
///
/// A missing file is an empty forest, not an error, so the first invocation
/// works without any setup.
pub fn load(path: &Path) -> Result<GoalStore> {
    if !path.exists() {
        debug!("data file {} missing, starting empty", path.display());
        return Ok(GoalStore::new());
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file {}", path.display()))?;
    let snapshot = Snapshot::from_json(&json)
        .with_context(|| format!("Failed to parse data file {}", path.display()))?;
    GoalStore::from_snapshot(snapshot)
        .with_context(|| format!("Data file {} failed validation", path.display()))
}

/// Writes the store back to the data file, creating parent directories as
/// needed.
pub fn save(path: &Path, store: &GoalStore) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let json = store
        .snapshot()
        .to_json()
        .context("Failed to serialize goals")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write data file {}", path.display()))?;
    debug!("saved {} goal(s) to {}", store.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use trellis_core::params::CreateGoal;

    use super::*;

    #[test]
    fn missing_file_loads_empty_store() {
        let dir = TempDir::new().expect("create temp dir");
        let store = load(&dir.path().join("absent.json")).expect("load");
        assert!(store.is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("nested").join("goals.json");

        let mut store = GoalStore::new();
        let goal = store
            .add_goal(&CreateGoal {
                text: "persisted".to_string(),
                parent: None,
            })
            .expect("add goal");
        save(&path, &store).expect("save");

        let loaded = load(&path).expect("load");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get(goal.id).expect("goal present").text, "persisted");
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("goals.json");
        fs::write(&path, "not json").expect("write garbage");
        assert!(load(&path).is_err());
    }
}
