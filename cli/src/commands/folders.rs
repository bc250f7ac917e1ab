use super::{AppContext, StashCommand};
use crate::output::colorize::{Colorize, ColorizeFolder};
use linkstash::error::Result;

#[derive(Debug, Clone)]
pub struct FoldersCommand;

impl StashCommand for FoldersCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<bool> {
        for folder in ctx.catalog.list_folders() {
            if ctx.no_color {
                println!("{:>4}  {} ({})", folder.count, folder.name, folder.id);
            } else {
                println!("{}", ColorizeFolder(folder).to_colored());
            }
        }
        Ok(false)
    }
}
