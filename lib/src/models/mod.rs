pub mod bookmark;
pub mod folder;

pub use bookmark::{Bookmark, BookmarkInput};
pub use folder::Folder;
