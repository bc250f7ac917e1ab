/// Error type for the linkstash engine and its collaborators.
///
/// Every failure here is a deterministic logic error reported synchronously;
/// the catalog is left in its pre-operation state.
#[derive(Debug, thiserror::Error)]
pub enum LinkstashError {
    /// Operation referenced a bookmark id that does not exist
    #[error("Bookmark with ID {0} not found")]
    BookmarkNotFound(String),

    /// Operation referenced a folder id that does not exist
    #[error("Folder '{0}' not found")]
    FolderNotFound(String),

    /// Rejected input (empty title, storing into the aggregate folder, ...)
    #[error("Invalid input: {0}")]
    Validation(String),

    /// I/O errors (snapshot and config files, exports)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON errors (snapshot serialization)
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML errors (config file)
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Browser integration errors
    #[error("Browser error: {0}")]
    Browser(String),

    /// Generic error for cases that don't fit other categories
    #[error("{0}")]
    Other(String),
}

/// Result type alias using LinkstashError
pub type Result<T> = std::result::Result<T, LinkstashError>;

impl From<String> for LinkstashError {
    fn from(s: String) -> Self {
        LinkstashError::Other(s)
    }
}

impl From<&str> for LinkstashError {
    fn from(s: &str) -> Self {
        LinkstashError::Other(s.to_string())
    }
}

impl From<serde_json::Error> for LinkstashError {
    fn from(err: serde_json::Error) -> Self {
        LinkstashError::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for LinkstashError {
    fn from(err: serde_yaml::Error) -> Self {
        LinkstashError::Yaml(err.to_string())
    }
}
