use crate::format::OutputFormat;
use linkstash::config::Config;
use linkstash::error::Result;
use linkstash::Catalog;

pub struct AppContext<'a> {
    pub catalog: &'a mut Catalog,
    pub config: &'a Config,
    pub format: OutputFormat,
    pub no_color: bool,
    pub limit: Option<usize>,
}

pub mod add;
pub mod delete;
pub mod export;
pub mod folders;
pub mod list;
pub mod open;
pub mod tags;
pub mod update;

/// A single CLI invocation against the catalog. Returns whether the catalog
/// was mutated, so the caller knows to write the snapshot back.
pub trait StashCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<bool>;
}

/// Enum-based dispatch for commands (avoids Box<dyn StashCommand>)
pub enum CommandEnum {
    Add(add::AddCommand),
    Update(update::UpdateCommand),
    Delete(delete::DeleteCommand),
    List(list::ListCommand),
    Folders(folders::FoldersCommand),
    Tags(tags::TagsCommand),
    Open(open::OpenCommand),
    Export(export::ExportCommand),
}

impl CommandEnum {
    pub fn execute(&self, ctx: &mut AppContext) -> Result<bool> {
        match self {
            Self::Add(cmd) => cmd.execute(ctx),
            Self::Update(cmd) => cmd.execute(ctx),
            Self::Delete(cmd) => cmd.execute(ctx),
            Self::List(cmd) => cmd.execute(ctx),
            Self::Folders(cmd) => cmd.execute(ctx),
            Self::Tags(cmd) => cmd.execute(ctx),
            Self::Open(cmd) => cmd.execute(ctx),
            Self::Export(cmd) => cmd.execute(ctx),
        }
    }
}
