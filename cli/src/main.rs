mod cli;
mod commands;
mod format;
mod output;

use clap::Parser;
use linkstash::error::Result;
use linkstash::snapshot::Snapshot;
use linkstash::{config, utils, Catalog};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Initialize logger
    env_logger::init();

    if args.version {
        println!("linkstash {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let data_path = if let Some(path) = &args.data {
        path.clone()
    } else {
        utils::get_default_datadir().join("bookmarks.json")
    };

    if let Some(parent) = data_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Load configuration
    let cfg = if let Some(config_path) = &args.config {
        config::Config::load_from_path(config_path)?
    } else {
        config::Config::load()
    };

    log::debug!("snapshot file: {:?}", data_path);

    // The catalog lives in memory; the snapshot file is its durable twin
    let mut catalog = if data_path.exists() {
        Catalog::from_snapshot(Snapshot::load_from_path(&data_path)?)?
    } else {
        Catalog::new(cfg.folders.clone())
    };

    let mutated = cli::handle_args(args, &mut catalog, &cfg)?;

    if mutated {
        catalog.to_snapshot().save_to_path(&data_path)?;
    }

    Ok(())
}
