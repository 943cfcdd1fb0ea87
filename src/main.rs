//! `cl` - command-line front end for the checklist tracker.
//!
//! Data lives in `~/.checklist/` (override with `--data-dir`): `todoList.json`
//! holds the items and `categories.json` the known categories. An optional
//! `keywords.json` next to them replaces the built-in keyword table.
//!
//! ```bash
//! cl add "周末去超市" --accept     # adds "[购物] 周末去超市"
//! cl list --filter 购物
//! cl summary
//! cl export -o backup.md
//! ```
//!
//! Set `RUST_LOG=debug` for verbose diagnostics on stderr.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use checklist::cli::Cli;
use checklist::cmd::*;
use checklist::{CategoryInferenceEngine, FileStore, KeywordIndex, TaskStore};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        cmd_completions(shell);
        return;
    }

    let data_dir = cli.data_dir.unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".checklist")
    });
    let keywords_path = cli.keywords.unwrap_or_else(|| data_dir.join("keywords.json"));

    if let Err(e) = run(cli.command, &data_dir, &keywords_path) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Commands, data_dir: &std::path::Path, keywords_path: &std::path::Path) -> checklist::Result<()> {
    let kv = FileStore::open(data_dir)?;
    let index = KeywordIndex::load(keywords_path);
    let mut store = TaskStore::bootstrap(kv, &index)?;
    let engine = CategoryInferenceEngine::new(index);

    match command {
        Commands::Add { text, accept } => cmd_add(&mut store, &engine, &text, accept),
        Commands::Suggest { text } => cmd_suggest(&mut store, &engine, &text),
        Commands::List { filter } => {
            cmd_list(&store, &filter);
            Ok(())
        }
        Commands::Toggle { id } => cmd_toggle(&mut store, id),
        Commands::Delete { id } => cmd_delete(&mut store, id),
        Commands::Clear { yes } => cmd_clear(&mut store, yes),
        Commands::Summary { filter } => {
            cmd_summary(&store, &filter);
            Ok(())
        }
        Commands::Categories => {
            cmd_categories(&store);
            Ok(())
        }
        Commands::Export { output } => cmd_export(&store, output),
        Commands::Import { input, yes } => cmd_import(&mut store, &input, yes),
        Commands::Completions { .. } => unreachable!("completions handled above"),
    }
}
