//! Command implementations for the CLI interface.
//!
//! Each handler works on an already bootstrapped `TaskStore` and prints plain
//! text. Destructive commands ask for confirmation on stdin unless `--yes` is
//! given.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::checklist::{self, ImportOutcome};
use crate::error::Result;
use crate::fields::Filter;
use crate::filter::filter_tasks;
use crate::infer::{CategoryInferenceEngine, Composer};
use crate::kv::KeyValueStore;
use crate::store::{ClearOutcome, TaskStore};
use crate::summary::{summarize, Summary};

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new item.
    Add {
        /// Item text. A leading "[Category] " marks its category.
        text: String,
        /// Accept the suggested category before adding.
        #[arg(long)]
        accept: bool,
    },

    /// Show the category suggested for a text.
    Suggest {
        text: String,
    },

    /// List items, optionally filtered.
    List {
        /// all | uncategorized | <category>
        #[arg(long, default_value = "all")]
        filter: Filter,
    },

    /// Flip an item between pending and done.
    Toggle {
        /// Item ID
        id: u64,
    },

    /// Delete an item.
    Delete {
        /// Item ID
        id: u64,
    },

    /// Remove every item.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Show the category distribution or completion rate.
    Summary {
        /// all | uncategorized | <category>
        #[arg(long, default_value = "all")]
        filter: Filter,
    },

    /// List known categories.
    Categories,

    /// Export all items to a checklist document.
    Export {
        /// Output file path (default: 清单_<date>_<time>.md)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Replace all items with those in a checklist document.
    Import {
        /// Input checklist file path
        input: PathBuf,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Add an item, optionally accepting the inferred category first.
pub fn cmd_add<S: KeyValueStore>(
    store: &mut TaskStore<S>,
    engine: &CategoryInferenceEngine,
    text: &str,
    accept: bool,
) -> Result<()> {
    let mut composer = Composer::new();
    let suggestion = composer.input(text, engine, store)?.map(str::to_string);
    let id = if accept {
        composer.accept_and_submit(store)?
    } else {
        composer.submit(store)?
    };

    match id.and_then(|id| store.get(id)) {
        Some(task) => {
            println!("Added item {}: {}", task.id, task.text());
            if let (false, Some(category)) = (accept, suggestion) {
                if task.category().is_none() {
                    println!("Suggested category: {category} (re-run with --accept to apply)");
                }
            }
        }
        None => println!("Nothing to add."),
    }
    Ok(())
}

/// Print the category suggested for a text.
pub fn cmd_suggest<S: KeyValueStore>(
    store: &mut TaskStore<S>,
    engine: &CategoryInferenceEngine,
    text: &str,
) -> Result<()> {
    match engine.suggest(text, store)? {
        Some(category) => println!("{category}"),
        None => println!("No suggestion."),
    }
    Ok(())
}

/// Print the items matching a filter.
pub fn cmd_list<S: KeyValueStore>(store: &TaskStore<S>, filter: &Filter) {
    let view = filter_tasks(store.tasks(), filter);
    if view.is_empty() {
        println!("No items ({filter}).");
        return;
    }
    println!("{:<5} {:<4} {:<10} {}", "ID", "Done", "Category", "Text");
    for task in view {
        println!(
            "{:<5} {:<4} {:<10} {}",
            task.id,
            if task.done { "[x]" } else { "[ ]" },
            truncate(task.category().unwrap_or("-"), 10),
            task.text()
        );
    }
}

/// Flip an item between pending and done.
pub fn cmd_toggle<S: KeyValueStore>(store: &mut TaskStore<S>, id: u64) -> Result<()> {
    let done = store.toggle_done(id)?;
    println!("Item {id} marked {}.", if done { "done" } else { "pending" });
    Ok(())
}

/// Delete an item by ID.
pub fn cmd_delete<S: KeyValueStore>(store: &mut TaskStore<S>, id: u64) -> Result<()> {
    let task = store.delete(id)?;
    println!("Deleted item {}: {}", task.id, task.text());
    Ok(())
}

/// Remove every item after confirmation.
pub fn cmd_clear<S: KeyValueStore>(store: &mut TaskStore<S>, yes: bool) -> Result<()> {
    match store.clear_all(|prompt| yes || prompt_yes_no(prompt))? {
        ClearOutcome::Cleared(_) => println!("所有事项已清空"),
        ClearOutcome::AlreadyEmpty => println!("清单已经是空的了！"),
        ClearOutcome::Declined => println!("Clear cancelled."),
    }
    Ok(())
}

/// Print the category distribution or completion rate for a filter.
pub fn cmd_summary<S: KeyValueStore>(store: &TaskStore<S>, filter: &Filter) {
    let view = filter_tasks(store.tasks(), filter);
    let summary = summarize(&view, filter);
    println!(
        "Filter: {}   Items: {}   Completion: {}%",
        filter,
        summary.total(),
        summary.completion_rate()
    );
    match &summary {
        Summary::Empty => println!("无事项"),
        Summary::Distribution { slices, .. } => {
            println!("{:<14} {:>5} {:>6}", "Category", "Count", "Share");
            for slice in slices {
                println!(
                    "{:<14} {:>5} {:>5}% {}",
                    truncate(&slice.label, 14),
                    slice.count,
                    slice.percent,
                    bar(slice.percent)
                );
            }
        }
        Summary::Completion { done, .. } => {
            println!("Done: {done}   {}", bar(summary.completion_rate()));
        }
    }
}

/// Print known categories with their item counts.
pub fn cmd_categories<S: KeyValueStore>(store: &TaskStore<S>) {
    for category in store.categories() {
        let count = store.tasks().iter().filter(|t| t.category() == Some(category.as_str())).count();
        println!("{:<14} {}", truncate(category, 14), count);
    }
}

/// Write all items to a checklist document.
pub fn cmd_export<S: KeyValueStore>(store: &TaskStore<S>, output: Option<PathBuf>) -> Result<()> {
    let path = output.unwrap_or_else(|| PathBuf::from(checklist::export_file_name(&Local::now())));
    fs::write(&path, checklist::export(store.tasks()))?;
    println!("Exported {} item(s) to {}", store.tasks().len(), path.display());
    Ok(())
}

/// Replace all items with those in a checklist document, after confirmation.
pub fn cmd_import<S: KeyValueStore>(store: &mut TaskStore<S>, input: &Path, yes: bool) -> Result<()> {
    let document = fs::read_to_string(input)?;
    match checklist::import(store, &document, |prompt| yes || prompt_yes_no(prompt))? {
        ImportOutcome::Replaced(count) => println!("Imported {count} item(s)."),
        ImportOutcome::NothingToImport => println!("未找到可导入的清单事项"),
        ImportOutcome::Declined => println!("Import cancelled."),
    }
    Ok(())
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut io::stdout());
}

/// Ask a yes/no question on stdin. Anything but "y..." declines.
fn prompt_yes_no(question: &str) -> bool {
    print!("{question} (y/N): ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut response = String::new();
    io::stdin().read_line(&mut response).is_ok() && response.trim().to_lowercase().starts_with('y')
}

/// Horizontal bar, one block per five percent.
fn bar(percent: u32) -> String {
    "█".repeat((percent / 5) as usize)
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}
