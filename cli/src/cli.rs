use crate::commands::{
    add::AddCommand, delete::DeleteCommand, export::ExportCommand, folders::FoldersCommand,
    list::ListCommand, open::OpenCommand, tags::TagsCommand, update::UpdateCommand, AppContext,
    CommandEnum,
};
use crate::format::OutputFormat;
use clap::{Parser, Subcommand};
use linkstash::config::Config;
use linkstash::error::Result;
use linkstash::Catalog;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Show the program version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Optional custom snapshot file path
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Optional custom configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long)]
    pub nc: bool,

    /// Output format: json, yaml or plain (default: colored)
    #[arg(short = 'f', long)]
    pub format: Option<String>,

    /// Limit number of results shown (shows last N entries)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Search keywords (when no subcommand is provided)
    #[arg(name = "KEYWORD")]
    pub keywords: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new bookmark
    Add {
        /// Bookmark title
        title: String,

        /// URL to bookmark
        url: String,

        /// Short description
        #[arg(short, long)]
        description: Option<String>,

        /// Free-form notes
        #[arg(short = 'N', long)]
        notes: Option<String>,

        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,

        /// Folder to file the bookmark under (default from config)
        #[arg(short = 'F', long)]
        folder: Option<String>,
    },

    /// Update an existing bookmark; omitted fields keep their values
    Update {
        /// Bookmark ID
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New URL
        #[arg(long)]
        url: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New notes
        #[arg(short = 'N', long)]
        notes: Option<String>,

        /// New comma-separated tags (replaces the old set)
        #[arg(short, long)]
        tags: Option<String>,

        /// Move to another folder
        #[arg(short = 'F', long)]
        folder: Option<String>,
    },

    /// Delete bookmark(s)
    Delete {
        /// Bookmark IDs to delete
        #[arg(num_args = 1..)]
        ids: Vec<String>,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// List bookmarks, filtered by folder, search text and required tags
    List {
        /// Free-text search (matches title, description and tags)
        keywords: Vec<String>,

        /// Only bookmarks in this folder
        #[arg(short = 'F', long)]
        folder: Option<String>,

        /// Comma-separated tags a bookmark must all carry
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Show folders with live bookmark counts
    Folders,

    /// Show every tag in use
    Tags,

    /// Open a bookmark in the browser
    Open {
        /// Bookmark ID to open
        id: String,
    },

    /// Export bookmarks to file (html, md or json by extension)
    Export {
        /// File path to export to
        file: String,
    },
}

pub fn handle_args(cli: Cli, catalog: &mut Catalog, config: &Config) -> Result<bool> {
    let format = OutputFormat::from_string(cli.format.as_deref().unwrap_or(""));
    let mut ctx = AppContext {
        catalog,
        config,
        format,
        no_color: cli.nc,
        limit: cli.limit,
    };

    let command = match cli.command {
        Some(Commands::Add {
            title,
            url,
            description,
            notes,
            tags,
            folder,
        }) => CommandEnum::Add(AddCommand {
            title,
            url,
            description,
            notes,
            tags,
            folder,
        }),

        Some(Commands::Update {
            id,
            title,
            url,
            description,
            notes,
            tags,
            folder,
        }) => CommandEnum::Update(UpdateCommand {
            id,
            title,
            url,
            description,
            notes,
            tags,
            folder,
        }),

        Some(Commands::Delete { ids, force }) => CommandEnum::Delete(DeleteCommand { ids, force }),

        Some(Commands::List {
            keywords,
            folder,
            tags,
        }) => CommandEnum::List(ListCommand {
            keywords,
            folder,
            tags,
        }),

        Some(Commands::Folders) => CommandEnum::Folders(FoldersCommand),

        Some(Commands::Tags) => CommandEnum::Tags(TagsCommand),

        Some(Commands::Open { id }) => CommandEnum::Open(OpenCommand { id }),

        Some(Commands::Export { file }) => CommandEnum::Export(ExportCommand { file }),

        // Bare keywords search the whole catalog
        None => CommandEnum::List(ListCommand {
            keywords: cli.keywords,
            folder: None,
            tags: None,
        }),
    };

    command.execute(&mut ctx)
}
