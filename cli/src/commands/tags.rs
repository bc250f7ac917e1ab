use super::{AppContext, StashCommand};
use linkstash::error::Result;
use owo_colors::OwoColorize;

#[derive(Debug, Clone)]
pub struct TagsCommand;

impl StashCommand for TagsCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<bool> {
        let tags = ctx.catalog.all_tags();
        if tags.is_empty() {
            eprintln!("No tags in use.");
            return Ok(false);
        }
        for tag in tags {
            if ctx.no_color {
                println!("{}", tag);
            } else {
                println!("{}", tag.blue());
            }
        }
        Ok(false)
    }
}
