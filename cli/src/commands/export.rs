use super::{AppContext, StashCommand};
use linkstash::error::Result;
use linkstash::export::export_bookmarks;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ExportCommand {
    pub file: String,
}

impl StashCommand for ExportCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<bool> {
        let path = Path::new(&self.file);
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        // json gets the full snapshot (re-importable); html/md are
        // presentation-only exports of the bookmark list
        if extension == "json" {
            ctx.catalog.to_snapshot().save_to_path(path)?;
        } else {
            export_bookmarks(ctx.catalog.list_bookmarks(), &self.file)?;
        }

        eprintln!(
            "Exported {} bookmark(s) to {}",
            ctx.catalog.list_bookmarks().len(),
            self.file
        );
        Ok(false)
    }
}
