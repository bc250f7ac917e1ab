/// Render a bookmark into one machine- or human-readable block.
pub trait BookmarkFormat {
    fn to_string(&self) -> String;
}
