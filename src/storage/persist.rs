//! Versioned state files: drafted set, filter configuration, player dataset.
//!
//! Each record lives under its own versioned file name so a schema change in
//! one never corrupts the other. Reads are best-effort: a missing or
//! unreadable file means "use defaults", never an error.

use anyhow::Context;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::storage::models::{FilterState, PlayerRow};

pub const DRAFTED_FILE: &str = "drafted_v1.json";
pub const FILTERS_FILE: &str = "filters_v1.json";
pub const DATASET_FILE: &str = "players_v1.json";

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Handle to the per-user state directory.
///
/// Default location: `<data_dir>/yahoo-fbb`, e.g. `~/.local/share/yahoo-fbb`.
#[derive(Debug, Clone)]
pub struct StateFiles {
    dir: PathBuf,
}

impl StateFiles {
    /// Open the default state directory for this user.
    pub fn open() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| {
            let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.push(".local");
            home.push("share");
            home
        });
        Self {
            dir: base.join("yahoo-fbb"),
        }
    }

    /// Use an explicit directory (tests, alternate profiles).
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn drafted_path(&self) -> PathBuf {
        self.dir.join(DRAFTED_FILE)
    }

    pub fn filters_path(&self) -> PathBuf {
        self.dir.join(FILTERS_FILE)
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.dir.join(DATASET_FILE)
    }

    /// The persisted drafted-id set, or empty when absent/unreadable.
    pub fn load_drafted(&self) -> BTreeSet<String> {
        self.read_json::<Vec<String>>(DRAFTED_FILE)
            .map(|ids| ids.into_iter().collect())
            .unwrap_or_default()
    }

    pub fn save_drafted(&self, drafted: &BTreeSet<String>) -> Result<()> {
        let ids: Vec<&String> = drafted.iter().collect();
        self.write_json(DRAFTED_FILE, &ids)
    }

    /// The persisted filter configuration, or defaults when absent/unreadable.
    pub fn load_filters(&self) -> FilterState {
        self.read_json(FILTERS_FILE).unwrap_or_default()
    }

    pub fn save_filters(&self, filters: &FilterState) -> Result<()> {
        self.write_json(FILTERS_FILE, filters)
    }

    /// The stored player dataset. `None` when no dataset has been synced or
    /// imported yet (or the file is unreadable).
    pub fn load_dataset(&self) -> Option<Vec<PlayerRow>> {
        self.read_json(DATASET_FILE)
    }

    pub fn save_dataset(&self, rows: &[PlayerRow]) -> Result<()> {
        self.write_json(DATASET_FILE, &rows)
    }

    fn read_json<T: DeserializeOwned>(&self, file: &str) -> Option<T> {
        let s = try_read_to_string(&self.dir.join(file))?;
        match serde_json::from_str(&s) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("ignoring unreadable state file {}: {}", file, err);
                None
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> Result<()> {
        let path = self.dir.join(file);
        let contents = serde_json::to_string_pretty(value)?;
        write_string(&path, &contents)
            .with_context(|| format!("writing state file {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::sort::{SortDir, SortKey};
    use tempfile::tempdir;

    #[test]
    fn test_missing_files_yield_defaults() {
        let dir = tempdir().unwrap();
        let files = StateFiles::with_dir(dir.path());

        assert!(files.load_drafted().is_empty());
        assert_eq!(files.load_filters(), FilterState::default());
        assert!(files.load_dataset().is_none());
    }

    #[test]
    fn test_drafted_round_trip() {
        let dir = tempdir().unwrap();
        let files = StateFiles::with_dir(dir.path());

        let drafted: BTreeSet<String> = ["1001", "1002"].iter().map(|s| s.to_string()).collect();
        files.save_drafted(&drafted).unwrap();

        assert_eq!(files.load_drafted(), drafted);
    }

    #[test]
    fn test_filters_round_trip() {
        let dir = tempdir().unwrap();
        let files = StateFiles::with_dir(dir.path());

        let filters = FilterState {
            query: "smart".to_string(),
            position: "PG".to_string(),
            hide_drafted: true,
            sort_key: SortKey::Steals,
            sort_dir: SortDir::Ascending,
            highlight_roster: false,
            only_roster: true,
        };
        files.save_filters(&filters).unwrap();

        assert_eq!(files.load_filters(), filters);
    }

    #[test]
    fn test_corrupt_files_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let files = StateFiles::with_dir(dir.path());

        write_string(&files.drafted_path(), "not json {").unwrap();
        write_string(&files.filters_path(), "[1, 2").unwrap();
        write_string(&files.dataset_path(), "{\"oops\": true}").unwrap();

        assert!(files.load_drafted().is_empty());
        assert_eq!(files.load_filters(), FilterState::default());
        assert!(files.load_dataset().is_none());
    }

    #[test]
    fn test_dataset_round_trip() {
        let dir = tempdir().unwrap();
        let files = StateFiles::with_dir(dir.path());

        let rows = vec![
            PlayerRow {
                player_id: "1".to_string(),
                name: "One".to_string(),
                fantasy_points: 40.0,
                ..PlayerRow::default()
            },
            PlayerRow {
                player_id: "2".to_string(),
                name: "Two".to_string(),
                fantasy_points: 30.0,
                ..PlayerRow::default()
            },
        ];
        files.save_dataset(&rows).unwrap();

        assert_eq!(files.load_dataset().unwrap(), rows);
    }

    #[test]
    fn test_records_are_independent() {
        let dir = tempdir().unwrap();
        let files = StateFiles::with_dir(dir.path());

        // Corrupting the drafted record must not affect the filters record
        let filters = FilterState {
            query: "kept".to_string(),
            ..FilterState::default()
        };
        files.save_filters(&filters).unwrap();
        write_string(&files.drafted_path(), "garbage").unwrap();

        assert!(files.load_drafted().is_empty());
        assert_eq!(files.load_filters().query, "kept");
    }
}
