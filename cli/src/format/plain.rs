use crate::format::traits::BookmarkFormat;
use linkstash::models::Bookmark;

pub struct PlainBookmark<'a>(pub &'a Bookmark);

impl<'a> BookmarkFormat for PlainBookmark<'a> {
    fn to_string(&self) -> String {
        let bookmark = self.0;
        let mut s = String::new();
        s.push_str(&format!("{} ({})\n", bookmark.title, bookmark.folder_id));
        s.push_str(&format!("  > {}\n", bookmark.url));
        if !bookmark.description.trim().is_empty() {
            s.push_str(&format!("  + {}\n", bookmark.description));
        }
        if !bookmark.notes.trim().is_empty() {
            s.push_str(&format!("  ~ {}\n", bookmark.notes));
        }
        if !bookmark.tags.is_empty() {
            s.push_str(&format!("  # {}\n", bookmark.tags.join(", ")));
        }
        s.push_str(&format!(
            "  @ {}  {}\n",
            bookmark.id,
            bookmark.created_at.format("%Y-%m-%d")
        ));
        s
    }
}
