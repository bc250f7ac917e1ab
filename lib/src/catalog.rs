use crate::error::{LinkstashError, Result};
use crate::folders::{FolderRegistry, ALL_FOLDER};
use crate::models::{Bookmark, BookmarkInput, Folder};
use crate::query::{self, Query};
use crate::snapshot::Snapshot;
use crate::tags;
use chrono::Utc;
use log::debug;
use uuid::Uuid;

/// The catalog engine: single owner of the bookmark collection and the
/// folder registry. All mutation goes through the methods here, each of
/// which restores the count invariant before returning.
#[derive(Debug)]
pub struct Catalog {
    bookmarks: Vec<Bookmark>,
    folders: FolderRegistry,
}

impl Catalog {
    /// Empty catalog over a fixed folder set (folders are defined at
    /// initialization; there is no folder CRUD).
    pub fn new(folder_definitions: Vec<Folder>) -> Self {
        Self {
            bookmarks: Vec::new(),
            folders: FolderRegistry::new(folder_definitions),
        }
    }

    /// Rebuild a catalog from a snapshot. Stored counts are discarded and
    /// re-derived from the bookmark list; a bookmark referencing a folder
    /// the snapshot doesn't define is an error.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let mut catalog = Self::new(snapshot.folders);
        for bookmark in &snapshot.bookmarks {
            if bookmark.folder_id == ALL_FOLDER || !catalog.folders.contains(&bookmark.folder_id) {
                return Err(LinkstashError::FolderNotFound(bookmark.folder_id.clone()));
            }
            catalog.folders.increment_count(&bookmark.folder_id);
        }
        catalog.bookmarks = snapshot.bookmarks;
        debug!(
            "catalog loaded: {} bookmarks, {} folders",
            catalog.bookmarks.len(),
            catalog.folders.list().len()
        );
        Ok(catalog)
    }

    /// Point-in-time copy of the full state for the persistence collaborator.
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            bookmarks: self.bookmarks.clone(),
            folders: self.folders.list().to_vec(),
        }
    }

    /// Create a bookmark from caller-supplied fields and file it under its
    /// folder. Returns the stored record with its fresh id and timestamp.
    pub fn create_bookmark(&mut self, input: BookmarkInput) -> Result<&Bookmark> {
        self.validate(&input)?;
        let bookmark = Bookmark {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            url: input.url,
            description: input.description,
            notes: input.notes,
            tags: tags::parse_tags(&input.tags_raw),
            folder_id: input.folder_id,
            created_at: Utc::now(),
        };
        self.folders.increment_count(&bookmark.folder_id);
        self.bookmarks.push(bookmark);
        let index = self.bookmarks.len() - 1;
        Ok(&self.bookmarks[index])
    }

    /// Replace the mutable fields of an existing bookmark. `id` and
    /// `created_at` are untouched. Moving a bookmark between folders issues
    /// the paired count adjustments.
    pub fn update_bookmark(&mut self, id: &str, input: BookmarkInput) -> Result<&Bookmark> {
        let index = self
            .index_of(id)
            .ok_or_else(|| LinkstashError::BookmarkNotFound(id.to_string()))?;
        self.validate(&input)?;

        let previous_folder = self.bookmarks[index].folder_id.clone();
        if previous_folder != input.folder_id {
            self.folders.decrement_count(&previous_folder);
            self.folders.increment_count(&input.folder_id);
        }

        let bookmark = &mut self.bookmarks[index];
        bookmark.title = input.title;
        bookmark.url = input.url;
        bookmark.description = input.description;
        bookmark.notes = input.notes;
        bookmark.tags = tags::parse_tags(&input.tags_raw);
        bookmark.folder_id = input.folder_id;
        Ok(&self.bookmarks[index])
    }

    /// Remove a bookmark and release its folder count.
    pub fn delete_bookmark(&mut self, id: &str) -> Result<()> {
        let index = self
            .index_of(id)
            .ok_or_else(|| LinkstashError::BookmarkNotFound(id.to_string()))?;
        let removed = self.bookmarks.remove(index);
        self.folders.decrement_count(&removed.folder_id);
        Ok(())
    }

    /// The full collection in insertion order. Callers must not assume
    /// sort-by-date.
    pub fn list_bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn get_bookmark(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    /// Folders in registration order ("all" first), counts live.
    pub fn list_folders(&self) -> &[Folder] {
        self.folders.list()
    }

    /// Every tag in use, first-seen order.
    pub fn all_tags(&self) -> Vec<String> {
        tags::all_tags(&self.bookmarks)
    }

    /// Filtered, ordered view of the collection for the given query.
    pub fn query_bookmarks(&self, query: &Query) -> Vec<&Bookmark> {
        query::filter(&self.bookmarks, query)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.bookmarks.iter().position(|b| b.id == id)
    }

    fn validate(&self, input: &BookmarkInput) -> Result<()> {
        if input.title.trim().is_empty() {
            return Err(LinkstashError::Validation(
                "bookmark title must not be empty".to_string(),
            ));
        }
        if input.folder_id == ALL_FOLDER {
            return Err(LinkstashError::Validation(format!(
                "'{}' is an aggregate folder and cannot store bookmarks",
                ALL_FOLDER
            )));
        }
        if !self.folders.contains(&input.folder_id) {
            return Err(LinkstashError::FolderNotFound(input.folder_id.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Folder::new("dev", "Development", "blue"),
            Folder::new("design", "Design", "purple"),
            Folder::new("personal", "Personal", "green"),
        ])
    }

    fn input(title: &str, folder: &str, tags_raw: &str) -> BookmarkInput {
        BookmarkInput {
            title: title.to_string(),
            url: format!("https://example.com/{}", title.to_lowercase()),
            description: format!("{} description", title),
            notes: String::new(),
            tags_raw: tags_raw.to_string(),
            folder_id: folder.to_string(),
        }
    }

    fn count_of(catalog: &Catalog, folder_id: &str) -> usize {
        catalog
            .list_folders()
            .iter()
            .find(|f| f.id == folder_id)
            .unwrap()
            .count
    }

    /// "all".count == sum of the other counts == number of bookmarks.
    fn assert_counts_consistent(catalog: &Catalog) {
        let total = catalog.list_bookmarks().len();
        let sum: usize = catalog
            .list_folders()
            .iter()
            .filter(|f| f.id != ALL_FOLDER)
            .map(|f| f.count)
            .sum();
        assert_eq!(count_of(catalog, ALL_FOLDER), total);
        assert_eq!(sum, total);
    }

    #[test]
    fn test_create_assigns_identity_and_files_counts() {
        let mut catalog = catalog();
        let created = catalog
            .create_bookmark(input("React Docs", "dev", "react, docs"))
            .unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.tags, vec!["react", "docs"]);
        assert_eq!(created.folder_id, "dev");
        assert_eq!(count_of(&catalog, "dev"), 1);
        assert_counts_consistent(&catalog);
    }

    #[test]
    fn test_create_generates_distinct_ids() {
        let mut catalog = catalog();
        let a = catalog.create_bookmark(input("A", "dev", "")).unwrap().id.clone();
        let b = catalog.create_bookmark(input("B", "dev", "")).unwrap().id.clone();
        assert_ne!(a, b);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_create_rejects_empty_title(#[case] title: &str) {
        let mut catalog = catalog();
        let result = catalog.create_bookmark(input(title, "dev", ""));
        assert!(matches!(result, Err(LinkstashError::Validation(_))));
        assert!(catalog.list_bookmarks().is_empty());
        assert_counts_consistent(&catalog);
    }

    #[test]
    fn test_create_rejects_unknown_folder() {
        let mut catalog = catalog();
        let result = catalog.create_bookmark(input("Title", "missing", ""));
        assert!(matches!(result, Err(LinkstashError::FolderNotFound(_))));
        assert!(catalog.list_bookmarks().is_empty());
    }

    #[test]
    fn test_create_rejects_all_sentinel_as_target() {
        let mut catalog = catalog();
        let result = catalog.create_bookmark(input("Title", ALL_FOLDER, ""));
        assert!(matches!(result, Err(LinkstashError::Validation(_))));
    }

    #[test]
    fn test_update_with_same_fields_is_a_fixpoint() {
        let mut catalog = catalog();
        let original = catalog
            .create_bookmark(input("React Docs", "dev", "react, docs"))
            .unwrap()
            .clone();

        let updated = catalog
            .update_bookmark(
                &original.id,
                BookmarkInput {
                    title: original.title.clone(),
                    url: original.url.clone(),
                    description: original.description.clone(),
                    notes: original.notes.clone(),
                    tags_raw: original.tags.join(", "),
                    folder_id: original.folder_id.clone(),
                },
            )
            .unwrap();

        assert_eq!(*updated, original);
        assert_counts_consistent(&catalog);
    }

    #[test]
    fn test_update_keeps_id_and_created_at() {
        let mut catalog = catalog();
        let original = catalog
            .create_bookmark(input("Before", "dev", "old"))
            .unwrap()
            .clone();

        let updated = catalog
            .update_bookmark(&original.id, input("After", "dev", "new"))
            .unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.title, "After");
        assert_eq!(updated.tags, vec!["new"]);
    }

    #[test]
    fn test_update_missing_id_fails() {
        let mut catalog = catalog();
        let result = catalog.update_bookmark("nope", input("Title", "dev", ""));
        assert!(matches!(result, Err(LinkstashError::BookmarkNotFound(_))));
    }

    #[test]
    fn test_update_moving_folders_adjusts_both_counts() {
        let mut catalog = catalog();
        let id = catalog
            .create_bookmark(input("Dribbble", "dev", "design"))
            .unwrap()
            .id
            .clone();

        catalog
            .update_bookmark(&id, input("Dribbble", "design", "design"))
            .unwrap();

        assert_eq!(count_of(&catalog, "dev"), 0);
        assert_eq!(count_of(&catalog, "design"), 1);
        assert_eq!(count_of(&catalog, ALL_FOLDER), 1);
        assert_counts_consistent(&catalog);
    }

    #[test]
    fn test_update_invalid_input_leaves_state_untouched() {
        let mut catalog = catalog();
        let original = catalog
            .create_bookmark(input("Keep Me", "dev", "a"))
            .unwrap()
            .clone();

        let result = catalog.update_bookmark(&original.id, input("", "dev", "b"));
        assert!(result.is_err());
        assert_eq!(*catalog.get_bookmark(&original.id).unwrap(), original);
        assert_counts_consistent(&catalog);
    }

    #[test]
    fn test_delete_missing_id_fails_twice_without_state_change() {
        let mut catalog = catalog();
        catalog.create_bookmark(input("Survivor", "dev", "")).unwrap();

        for _ in 0..2 {
            let result = catalog.delete_bookmark("ghost");
            assert!(matches!(result, Err(LinkstashError::BookmarkNotFound(_))));
        }
        assert_eq!(catalog.list_bookmarks().len(), 1);
        assert_counts_consistent(&catalog);
    }

    #[test]
    fn test_folder_count_scenario() {
        let mut catalog = catalog();
        catalog.create_bookmark(input("One", "dev", "")).unwrap();
        catalog.create_bookmark(input("Two", "dev", "")).unwrap();
        let design_id = catalog
            .create_bookmark(input("Three", "design", ""))
            .unwrap()
            .id
            .clone();

        assert_eq!(count_of(&catalog, "dev"), 2);
        assert_eq!(count_of(&catalog, "design"), 1);
        assert_eq!(count_of(&catalog, ALL_FOLDER), 3);

        catalog.delete_bookmark(&design_id).unwrap();
        assert_eq!(count_of(&catalog, "design"), 0);
        assert_eq!(count_of(&catalog, ALL_FOLDER), 2);
        assert_counts_consistent(&catalog);
    }

    #[test]
    fn test_default_query_equals_list() {
        let mut catalog = catalog();
        catalog.create_bookmark(input("One", "dev", "x")).unwrap();
        catalog.create_bookmark(input("Two", "design", "y")).unwrap();
        catalog.create_bookmark(input("Three", "personal", "")).unwrap();

        let listed: Vec<&Bookmark> = catalog.list_bookmarks().iter().collect();
        let queried = catalog.query_bookmarks(&Query::default());
        assert_eq!(queried, listed);
    }

    #[test]
    fn test_counts_consistent_across_mixed_mutations() {
        let mut catalog = catalog();
        let mut ids = Vec::new();
        for (title, folder) in [("A", "dev"), ("B", "design"), ("C", "dev"), ("D", "personal")] {
            ids.push(catalog.create_bookmark(input(title, folder, "")).unwrap().id.clone());
            assert_counts_consistent(&catalog);
        }
        catalog.delete_bookmark(&ids[1]).unwrap();
        assert_counts_consistent(&catalog);
        catalog.update_bookmark(&ids[0], input("A2", "personal", "")).unwrap();
        assert_counts_consistent(&catalog);
        catalog.delete_bookmark(&ids[3]).unwrap();
        assert_counts_consistent(&catalog);
    }

    #[test]
    fn test_snapshot_roundtrip_rebuilds_counts() {
        let mut catalog = catalog();
        catalog.create_bookmark(input("One", "dev", "x")).unwrap();
        catalog.create_bookmark(input("Two", "design", "y")).unwrap();

        let mut snapshot = catalog.to_snapshot();
        // Simulate a hand-edited file with bogus counts
        for folder in &mut snapshot.folders {
            folder.count = 99;
        }

        let restored = Catalog::from_snapshot(snapshot).unwrap();
        assert_eq!(restored.list_bookmarks(), catalog.list_bookmarks());
        assert_eq!(count_of(&restored, "dev"), 1);
        assert_eq!(count_of(&restored, ALL_FOLDER), 2);
        assert_counts_consistent(&restored);
    }

    #[test]
    fn test_snapshot_with_orphaned_bookmark_is_rejected() {
        let mut catalog = catalog();
        catalog.create_bookmark(input("One", "dev", "")).unwrap();

        let mut snapshot = catalog.to_snapshot();
        snapshot.folders.retain(|f| f.id != "dev");

        let result = Catalog::from_snapshot(snapshot);
        assert!(matches!(result, Err(LinkstashError::FolderNotFound(_))));
    }
}
