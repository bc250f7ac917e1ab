use crate::folders::ALL_FOLDER;
use crate::models::Bookmark;

/// Query parameters, owned by the caller (the UI keeps them as its view
/// state). Defaults select everything.
#[derive(Debug, Clone)]
pub struct Query {
    pub folder_id: String,
    pub search: String,
    pub required_tags: Vec<String>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            folder_id: ALL_FOLDER.to_string(),
            search: String::new(),
            required_tags: Vec::new(),
        }
    }
}

/// Filter a bookmark slice down to the ordered subsequence matching every
/// predicate of the query. Pure function: no hidden state, no caching,
/// identical inputs give the identical ordered result.
pub fn filter<'a>(bookmarks: &'a [Bookmark], query: &Query) -> Vec<&'a Bookmark> {
    bookmarks
        .iter()
        .filter(|b| matches_folder(b, &query.folder_id))
        .filter(|b| matches_search(b, &query.search))
        .filter(|b| matches_tags(b, &query.required_tags))
        .collect()
}

fn matches_folder(bookmark: &Bookmark, folder_id: &str) -> bool {
    folder_id == ALL_FOLDER || bookmark.folder_id == folder_id
}

/// Case-insensitive substring match against title, description or any tag.
/// Exact substring only; no fuzzy matching, no tokenization.
fn matches_search(bookmark: &Bookmark, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    bookmark.title.to_lowercase().contains(&needle)
        || bookmark.description.to_lowercase().contains(&needle)
        || bookmark
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// AND semantics: every required tag must be present, case-sensitive.
fn matches_tags(bookmark: &Bookmark, required: &[String]) -> bool {
    required.iter().all(|tag| bookmark.tags.contains(tag))
}
