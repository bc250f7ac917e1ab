use super::{AppContext, StashCommand};
use linkstash::error::{LinkstashError, Result};
use std::io::{self, Write};

#[derive(Debug, Clone)]
pub struct DeleteCommand {
    pub ids: Vec<String>,
    pub force: bool,
}

impl StashCommand for DeleteCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<bool> {
        // Resolve every id up front so a typo fails before anything is removed
        let mut targets: Vec<(String, String, String)> = Vec::with_capacity(self.ids.len());
        for id in &self.ids {
            if targets.iter().any(|(seen, _, _)| seen == id) {
                continue;
            }
            let bookmark = ctx
                .catalog
                .get_bookmark(id)
                .ok_or_else(|| LinkstashError::BookmarkNotFound(id.clone()))?;
            targets.push((bookmark.id.clone(), bookmark.title.clone(), bookmark.url.clone()));
        }

        eprintln!("Bookmarks to be deleted:");
        for (id, title, url) in &targets {
            eprintln!("  {} - {} ({})", id, title, url);
        }

        let confirmed = if self.force {
            true
        } else {
            print!("\nDelete {} bookmark(s)? [y/N]: ", targets.len());
            io::stdout().flush()?;

            let mut response = String::new();
            io::stdin().read_line(&mut response)?;
            let response = response.trim().to_lowercase();
            response == "y" || response == "yes"
        };

        if !confirmed {
            eprintln!("Deletion cancelled.");
            return Ok(false);
        }

        for (id, _, _) in &targets {
            ctx.catalog.delete_bookmark(id)?;
        }
        eprintln!("Deleted {} bookmark(s).", targets.len());
        Ok(true)
    }
}
