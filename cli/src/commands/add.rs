use super::{AppContext, StashCommand};
use linkstash::error::Result;
use linkstash::models::BookmarkInput;

#[derive(Debug, Clone)]
pub struct AddCommand {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<String>,
    pub folder: Option<String>,
}

impl StashCommand for AddCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<bool> {
        let folder_id = self
            .folder
            .clone()
            .unwrap_or_else(|| ctx.config.default_folder.clone());

        let created = ctx.catalog.create_bookmark(BookmarkInput {
            title: self.title.clone(),
            url: self.url.clone(),
            description: self.description.clone().unwrap_or_default(),
            notes: self.notes.clone().unwrap_or_default(),
            tags_raw: self.tags.clone().unwrap_or_default(),
            folder_id,
        })?;

        eprintln!("Added bookmark {}", created.id);
        Ok(true)
    }
}
