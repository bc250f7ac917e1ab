use crate::error::{LinkstashError, Result};

/// Open a bookmark URL in the system default browser.
pub fn open_bookmark(url: &str) -> Result<()> {
    open::that(url).map_err(|e| LinkstashError::Browser(format!("failed to open {}: {}", url, e)))
}
