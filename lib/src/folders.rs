use crate::models::Folder;
use log::debug;

/// Id of the virtual folder aggregating every bookmark. It stores nothing
/// itself; its count tracks the total across all folders.
pub const ALL_FOLDER: &str = "all";

/// Owns the fixed folder set and each folder's live bookmark count.
///
/// Counts are cached integers adjusted by the store on every mutation; they
/// are never recomputed by scanning the bookmark collection.
#[derive(Debug, Clone)]
pub struct FolderRegistry {
    folders: Vec<Folder>,
}

impl FolderRegistry {
    /// Build a registry from folder definitions, zeroing all counts. The
    /// "all" sentinel is inserted at the front when the definitions don't
    /// carry one.
    pub fn new(definitions: Vec<Folder>) -> Self {
        let mut folders: Vec<Folder> = Vec::with_capacity(definitions.len() + 1);
        if !definitions.iter().any(|f| f.id == ALL_FOLDER) {
            folders.push(Folder::new(ALL_FOLDER, "All Links", "gray"));
        }
        for mut folder in definitions {
            folder.count = 0;
            folders.push(folder);
        }
        Self { folders }
    }

    /// All folders in registration order ("all" first), with live counts.
    pub fn list(&self) -> &[Folder] {
        &self.folders
    }

    pub fn get(&self, folder_id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == folder_id)
    }

    pub fn contains(&self, folder_id: &str) -> bool {
        self.get(folder_id).is_some()
    }

    /// Bump the named folder's count, and the "all" total alongside it.
    /// Unknown ids are a silent no-op; the store validates before filing.
    pub fn increment_count(&mut self, folder_id: &str) {
        if !self.contains(folder_id) {
            debug!("increment_count: unknown folder '{}', ignoring", folder_id);
            return;
        }
        for folder in &mut self.folders {
            if folder.id == folder_id || (folder.id == ALL_FOLDER && folder_id != ALL_FOLDER) {
                folder.count += 1;
            }
        }
    }

    /// Symmetric decrement. Counts saturate at zero rather than wrapping.
    pub fn decrement_count(&mut self, folder_id: &str) {
        if !self.contains(folder_id) {
            debug!("decrement_count: unknown folder '{}', ignoring", folder_id);
            return;
        }
        for folder in &mut self.folders {
            if folder.id == folder_id || (folder.id == ALL_FOLDER && folder_id != ALL_FOLDER) {
                folder.count = folder.count.saturating_sub(1);
            }
        }
    }
}
