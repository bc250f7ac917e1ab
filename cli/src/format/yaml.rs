use crate::format::traits::BookmarkFormat;
use linkstash::models::Bookmark;

pub struct YamlBookmark<'a>(pub &'a Bookmark);

impl<'a> BookmarkFormat for YamlBookmark<'a> {
    fn to_string(&self) -> String {
        serde_yaml::to_string(self.0).unwrap_or_default()
    }
}
