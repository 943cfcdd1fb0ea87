//! Command-line argument definitions.
//!
//! Global options select where data and the keyword table live; the
//! subcommands themselves are defined in `cmd`.

use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Personal checklist with keyword-based category suggestions.
/// Storage defaults to ~/.checklist or a directory passed via --data-dir.
#[derive(Parser)]
#[command(name = "cl", version, about = "Personal checklist CLI")]
pub struct Cli {
    /// Directory holding the persisted task and category entries.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keyword table (JSON object keyword -> category). Defaults to
    /// <data-dir>/keywords.json; the built-in table is used if it is unreadable.
    #[arg(long, global = true)]
    pub keywords: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
