//! # checklist - personal task tracker
//!
//! A small checklist that suggests a category for each new item by keyword
//! matching, projects the collection through category filters into summary
//! numbers (category distribution or completion rate), and round-trips the
//! whole list through a plain-text checklist document.
//!
//! ## Building blocks
//!
//! - [`KeywordIndex`]: ordered keyword → category table; first match wins.
//! - [`CategoryInferenceEngine`] and [`Composer`]: suggestions for draft text
//!   and the accept / dismiss / submit flow.
//! - [`TaskStore`]: the task collection and category set, persisted through a
//!   [`KeyValueStore`] after every accepted mutation.
//! - [`filter_tasks`] and [`summarize`]: read-side views for a [`Filter`].
//! - [`checklist`]: export to and import from the checklist document.
//!
//! ## Example
//!
//! ```
//! use ::checklist::{checklist, summarize, filter_tasks, Filter, KeywordIndex, MemoryStore, TaskStore};
//!
//! let mut store = TaskStore::bootstrap(MemoryStore::new(), &KeywordIndex::builtin()).unwrap();
//! store.clear_all(|_| true).unwrap();
//! store.add("[工作] 写周报").unwrap();
//!
//! let view = filter_tasks(store.tasks(), &Filter::All);
//! assert_eq!(summarize(&view, &Filter::All).completion_rate(), 0);
//! assert!(checklist::export(store.tasks()).contains("- [ ] [工作] 写周报"));
//! ```

pub mod checklist;
pub mod cli;
pub mod cmd;
pub mod error;
pub mod fields;
pub mod filter;
pub mod infer;
pub mod keywords;
pub mod kv;
pub mod seed;
pub mod store;
pub mod summary;
pub mod task;

pub use error::{Error, Result};
pub use fields::Filter;
pub use filter::{extract_category, filter_tasks};
pub use infer::{CategoryInferenceEngine, Composer};
pub use keywords::KeywordIndex;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use store::{ClearOutcome, TaskStore};
pub use summary::{summarize, Slice, Summary};
pub use task::Task;
