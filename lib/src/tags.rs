use crate::models::Bookmark;

/// Parse comma-separated tag input: split, trim whitespace, drop empty
/// parts, collapse duplicates keeping the first occurrence.
pub fn parse_tags(tags_raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for part in tags_raw.split(',') {
        let tag = part.trim();
        if tag.is_empty() || tags.iter().any(|t| t == tag) {
            continue;
        }
        tags.push(tag.to_string());
    }
    tags
}

/// Every distinct tag in use, in first-seen order across a full scan of the
/// collection. Derived on each call; the tag index holds no state of its own.
pub fn all_tags(bookmarks: &[Bookmark]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for bookmark in bookmarks {
        for tag in &bookmark.tags {
            if !seen.iter().any(|t| t == tag) {
                seen.push(tag.clone());
            }
        }
    }
    seen
}
