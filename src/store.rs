//! Run history and favourites.
//!
//! Every successful launch is recorded with the commands the user entered
//! and the `wt` string that ran. Any launch can be saved under a name as a
//! favourite and re-run later without re-rendering.
//!
//! The store is a single JSON document. Each mutation is written straight
//! back to disk, so a crash never loses more than the call in flight.

use crate::error::{MpwtError, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One recorded launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub executed_at: DateTime<Local>,
    pub cmds: Vec<String>,
    pub pane_count: usize,
    pub wt_cmd: String,
}

/// A named, saved launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favourite {
    pub name: String,
    pub cmds: Vec<String>,
    pub wt_cmd: String,
    pub created_at: DateTime<Local>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    history: Vec<HistoryEntry>,
    #[serde(default)]
    favourites: Vec<Favourite>,
}

/// File-backed history and favourites.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    doc: Document,
}

impl Store {
    /// Open the store at `path`. A missing file opens as an empty store.
    ///
    /// # Errors
    ///
    /// - [`MpwtError::IoError`] if the file exists but cannot be read
    /// - [`MpwtError::StoreError`] if it is not a valid store document
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let doc = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            Document::default()
        };
        Ok(Self { path, doc })
    }

    /// Record a launch of `wt_cmd` rendered from `cmds`.
    pub fn insert_history(&mut self, cmds: &[String], wt_cmd: &str) -> Result<()> {
        self.doc.history.push(HistoryEntry {
            executed_at: Local::now(),
            cmds: cmds.to_vec(),
            pane_count: cmds.len(),
            wt_cmd: wt_cmd.to_string(),
        });
        self.save()
    }

    /// All recorded launches, newest first.
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.doc.history.iter().rev()
    }

    /// The launch at a 1-based position in [`Store::history`] order.
    pub fn history_entry(&self, index: usize) -> Result<&HistoryEntry> {
        index
            .checked_sub(1)
            .and_then(|i| self.history().nth(i))
            .ok_or(MpwtError::HistoryNotFound(index))
    }

    /// Save a launch under `name`.
    ///
    /// # Errors
    ///
    /// - [`MpwtError::InvalidConfig`] if `name` is blank
    /// - [`MpwtError::FavouriteExists`] if `name` is taken
    pub fn insert_favourite(&mut self, name: &str, wt_cmd: &str, cmds: &[String]) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MpwtError::InvalidConfig(
                "favourite name must not be empty".into(),
            ));
        }
        if self.favourite(name).is_some() {
            return Err(MpwtError::FavouriteExists(name.to_string()));
        }

        self.doc.favourites.push(Favourite {
            name: name.to_string(),
            cmds: cmds.to_vec(),
            wt_cmd: wt_cmd.to_string(),
            created_at: Local::now(),
        });
        self.save()
    }

    /// Remove the favourite called `name`.
    pub fn delete_favourite(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        let before = self.doc.favourites.len();
        self.doc.favourites.retain(|f| f.name != name);
        if self.doc.favourites.len() == before {
            return Err(MpwtError::FavouriteNotFound(name.to_string()));
        }
        self.save()
    }

    /// Look up a favourite. Surrounding whitespace in `name` is ignored, as
    /// it is when saving.
    pub fn favourite(&self, name: &str) -> Option<&Favourite> {
        let name = name.trim();
        self.doc.favourites.iter().find(|f| f.name == name)
    }

    /// All favourites, sorted by name.
    pub fn favourites(&self) -> Vec<&Favourite> {
        let mut result: Vec<_> = self.doc.favourites.iter().collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        result
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.doc)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmds(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_open_missing_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("store.json")).unwrap();
        assert_eq!(store.history().count(), 0);
        assert!(store.favourites().is_empty());
    }

    #[test]
    fn test_history_newest_first_and_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("store.json");

        let mut store = Store::open(&path).unwrap();
        store.insert_history(&cmds(&["a"]), "wt -w new a").unwrap();
        store.insert_history(&cmds(&["b", "c"]), "wt -w new b").unwrap();

        let reopened = Store::open(&path).unwrap();
        let history: Vec<_> = reopened.history().collect();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].cmds, cmds(&["b", "c"]));
        assert_eq!(history[0].pane_count, 2);
        assert_eq!(reopened.history_entry(2).unwrap().wt_cmd, "wt -w new a");
        assert!(matches!(
            reopened.history_entry(0),
            Err(MpwtError::HistoryNotFound(0))
        ));
        assert!(matches!(
            reopened.history_entry(3),
            Err(MpwtError::HistoryNotFound(3))
        ));
    }

    #[test]
    fn test_rerun_history_entry_becomes_newest() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(dir.path().join("store.json")).unwrap();
        store.insert_history(&cmds(&["a", "b"]), "wt -w new a").unwrap();
        store.insert_history(&cmds(&["c"]), "wt -w new c").unwrap();

        let entry = store.history_entry(2).unwrap().clone();
        store.insert_history(&entry.cmds, &entry.wt_cmd).unwrap();

        let newest = store.history_entry(1).unwrap();
        assert_eq!(newest.wt_cmd, "wt -w new a");
        assert_eq!(newest.pane_count, 2);
        assert_eq!(store.history().count(), 3);
    }

    #[test]
    fn test_favourites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut store = Store::open(&path).unwrap();

        store.insert_favourite("zeta", "wt z", &cmds(&["z"])).unwrap();
        store.insert_favourite(" alpha ", "wt a", &cmds(&["a"])).unwrap();
        assert!(matches!(
            store.insert_favourite("zeta", "wt z2", &[]),
            Err(MpwtError::FavouriteExists(_))
        ));
        assert!(matches!(
            store.insert_favourite("  ", "wt", &[]),
            Err(MpwtError::InvalidConfig(_))
        ));

        let names: Vec<_> = store.favourites().iter().map(|f| f.name.clone()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);

        store.delete_favourite("zeta").unwrap();
        assert!(matches!(
            store.delete_favourite("zeta"),
            Err(MpwtError::FavouriteNotFound(_))
        ));

        let reopened = Store::open(&path).unwrap();
        assert_eq!(reopened.favourite("alpha").unwrap().wt_cmd, "wt a");
        assert!(reopened.favourite("zeta").is_none());
    }

    #[test]
    fn test_favourite_names_trimmed_on_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(dir.path().join("store.json")).unwrap();

        store.insert_favourite(" dev ", "wt d", &cmds(&["d"])).unwrap();
        assert_eq!(store.favourite(" dev ").unwrap().name, "dev");
        assert!(matches!(
            store.insert_favourite("dev  ", "wt d2", &[]),
            Err(MpwtError::FavouriteExists(_))
        ));

        store.delete_favourite(" dev ").unwrap();
        assert!(store.favourite("dev").is_none());
    }

    #[test]
    fn test_open_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(Store::open(&path), Err(MpwtError::StoreError(_))));
    }
}
