//! Task data structure.
//!
//! A task's category is held in an explicit field that is always derived from
//! the text on construction. The `[Category] ` bracket prefix is only a
//! serialization convention used by the persisted records and the checklist
//! document.

use serde::{Deserialize, Serialize};

use crate::filter::extract_category;

/// A single checklist item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    text: String,
    category: Option<String>,
    pub done: bool,
}

impl Task {
    /// Create a pending task. The category is taken from the first bracketed
    /// token of `text`.
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        let text = text.into();
        let category = extract_category(&text).map(str::to_string);
        Task { id, text, category, done: false }
    }

    /// Full display text, including any bracketed category marker.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Persisted shape of a task. Records written before ids existed have no `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct TaskRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub text: String,
    pub done: bool,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        TaskRecord { id: Some(task.id), text: task.text.clone(), done: task.done }
    }
}
