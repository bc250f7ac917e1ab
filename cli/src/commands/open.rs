use super::{AppContext, StashCommand};
use linkstash::error::{LinkstashError, Result};

#[derive(Debug, Clone)]
pub struct OpenCommand {
    pub id: String,
}

impl StashCommand for OpenCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<bool> {
        let bookmark = ctx
            .catalog
            .get_bookmark(&self.id)
            .ok_or_else(|| LinkstashError::BookmarkNotFound(self.id.clone()))?;

        eprintln!("Opening {}", bookmark.url);
        linkstash::browser::open_bookmark(&bookmark.url)?;
        Ok(false)
    }
}
