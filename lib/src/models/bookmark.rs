use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cataloged link with all its metadata.
///
/// `id` and `created_at` are set once by the catalog and never mutated.
/// `tags` holds case-sensitive, deduplicated tag strings in parse order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    pub notes: String,
    pub tags: Vec<String>,
    pub folder_id: String,
    pub created_at: DateTime<Utc>,
}

/// Mutable bookmark fields as submitted by a caller.
///
/// `tags_raw` is the comma-separated form an entry field produces; the
/// catalog parses it with `tags::parse_tags` on create and update.
#[derive(Debug, Clone, Default)]
pub struct BookmarkInput {
    pub title: String,
    pub url: String,
    pub description: String,
    pub notes: String,
    pub tags_raw: String,
    pub folder_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Bookmark {
        Bookmark {
            id: "b1".to_string(),
            title: "Example".to_string(),
            url: "https://example.com".to_string(),
            description: "A test bookmark".to_string(),
            notes: String::new(),
            tags: vec!["rust".to_string()],
            folder_id: "dev".to_string(),
            created_at: "2024-01-15T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_bookmark_serializes_camel_case() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"folderId\":\"dev\""));
        assert!(json.contains("\"createdAt\":\"2024-01-15T00:00:00Z\""));
        assert!(!json.contains("folder_id"));
    }

    #[test]
    fn test_bookmark_roundtrip_preserves_instant() {
        let bookmark = sample();
        let json = serde_json::to_string(&bookmark).unwrap();
        let back: Bookmark = serde_json::from_str(&json).unwrap();
        assert_eq!(bookmark, back);
        assert_eq!(bookmark.created_at, back.created_at);
    }
}
