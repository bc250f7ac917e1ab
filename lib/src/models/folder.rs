use serde::{Deserialize, Serialize};

/// A named folder with its cached live bookmark count.
///
/// `color` is presentational and opaque to the engine. `count` is maintained
/// by the registry: for a regular folder it equals the number of bookmarks
/// filed under it, for the "all" sentinel it equals the total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub count: usize,
}

impl Folder {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            count: 0,
        }
    }
}
