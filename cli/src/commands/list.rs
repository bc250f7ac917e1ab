use super::{AppContext, StashCommand};
use linkstash::error::Result;
use linkstash::folders::ALL_FOLDER;
use linkstash::tags::parse_tags;
use linkstash::Query;

#[derive(Debug, Clone)]
pub struct ListCommand {
    pub keywords: Vec<String>,
    pub folder: Option<String>,
    pub tags: Option<String>,
}

impl StashCommand for ListCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<bool> {
        let query = Query {
            folder_id: self
                .folder
                .clone()
                .unwrap_or_else(|| ALL_FOLDER.to_string()),
            search: self.keywords.join(" "),
            required_tags: parse_tags(self.tags.as_deref().unwrap_or("")),
        };

        let mut records = ctx.catalog.query_bookmarks(&query);
        if let Some(limit) = ctx.limit {
            let skip = records.len().saturating_sub(limit);
            records = records.split_off(skip);
        }

        if records.is_empty() {
            eprintln!("No bookmarks found.");
            return Ok(false);
        }

        ctx.format.print_bookmarks(&records, ctx.no_color);
        Ok(false)
    }
}
