use crate::error::Result;
use crate::models::{Bookmark, Folder};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serialized form of the full catalog state. Timestamps travel as RFC3339
/// strings and parse back to the same instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub bookmarks: Vec<Bookmark>,
    pub folders: Vec<Folder>,
}

impl Snapshot {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&contents)?;
        debug!(
            "loaded snapshot from {:?}: {} bookmarks",
            path,
            snapshot.bookmarks.len()
        );
        Ok(snapshot)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        debug!("saved snapshot to {:?}: {} bookmarks", path, self.bookmarks.len());
        Ok(())
    }
}
