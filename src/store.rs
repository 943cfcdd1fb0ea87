//! The task store: single source of truth for tasks and categories.
//!
//! Every accepted mutation ends with a full rewrite of the affected persisted
//! entry. Tasks are addressed by their stable id, never by position.

use tracing::{debug, info, warn};

use crate::checklist::ChecklistItem;
use crate::error::{Error, Result};
use crate::keywords::KeywordIndex;
use crate::kv::KeyValueStore;
use crate::seed::SEED_ITEMS;
use crate::task::{Task, TaskRecord};

/// Persisted key for the task list.
pub const TASKS_KEY: &str = "todoList";
/// Persisted key for the category list.
pub const CATEGORIES_KEY: &str = "categories";

/// Result of a clear-all request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared(usize),
    /// Nothing to clear; the confirmation gate was not consulted.
    AlreadyEmpty,
    Declined,
}

#[derive(Debug)]
pub struct TaskStore<S: KeyValueStore> {
    kv: S,
    tasks: Vec<Task>,
    categories: Vec<String>,
    next_id: u64,
    seeded: bool,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Read tasks and categories from `kv`.
    ///
    /// An absent or unreadable task entry yields the seed list; a present but
    /// empty one stays empty.
    pub fn open(kv: S) -> Result<Self> {
        let records: Option<Vec<TaskRecord>> = read_entry(&kv, TASKS_KEY)?;
        let categories: Vec<String> = read_entry(&kv, CATEGORIES_KEY)?.unwrap_or_default();

        let mut store = TaskStore { kv, tasks: Vec::new(), categories, next_id: 1, seeded: false };
        match records {
            Some(records) => store.restore(records),
            None => {
                let mut tasks = Vec::with_capacity(SEED_ITEMS.len());
                for text in SEED_ITEMS {
                    tasks.push(Task::new(store.allocate_id(), *text));
                }
                store.tasks = tasks;
                store.seeded = true;
            }
        }
        Ok(store)
    }

    /// Startup sequence: open, merge the keyword table's categories, and
    /// persist the seed list if one was generated.
    pub fn bootstrap(kv: S, index: &KeywordIndex) -> Result<Self> {
        let mut store = TaskStore::open(kv)?;
        store.merge_categories(index.categories())?;
        if store.seeded {
            info!(count = store.tasks.len(), "no saved checklist, loaded seed items");
            store.persist_tasks()?;
        }
        Ok(store)
    }

    fn restore(&mut self, records: Vec<TaskRecord>) {
        // Ids that leave no room for a successor are discarded and the whole
        // list is renumbered from 1.
        let next = records.iter().filter_map(|r| r.id).max().unwrap_or(0).checked_add(1);
        if next.is_none() {
            warn!("persisted task ids exhausted, renumbering");
        }
        self.next_id = next.unwrap_or(1);
        let mut tasks = Vec::with_capacity(records.len());
        for record in records {
            let id = match record.id.filter(|_| next.is_some()) {
                Some(id) => id,
                None => self.allocate_id(),
            };
            let mut task = Task::new(id, record.text);
            task.done = record.done;
            tasks.push(task);
        }
        self.tasks = tasks;
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Known categories in the order they were first seen.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Get a task by ID.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// The underlying persistence handle.
    pub fn kv(&self) -> &S {
        &self.kv
    }

    /// Append a pending task. Returns `None` (and writes nothing) when the
    /// trimmed text is empty.
    ///
    /// Line breaks inside the text are folded into single spaces so that each
    /// task stays on one checklist line.
    pub fn add(&mut self, text: &str) -> Result<Option<u64>> {
        let text = single_line(text);
        if text.is_empty() {
            return Ok(None);
        }
        let id = self.allocate_id();
        debug!(id, text = text.as_str(), "task added");
        self.tasks.push(Task::new(id, text));
        self.persist_tasks()?;
        Ok(Some(id))
    }

    /// Flip the done flag. Returns the new value.
    pub fn toggle_done(&mut self, id: u64) -> Result<bool> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        task.done = !task.done;
        let done = task.done;
        debug!(id, done, "task toggled");
        self.persist_tasks()?;
        Ok(done)
    }

    /// Remove a task by ID and return it.
    pub fn delete(&mut self, id: u64) -> Result<Task> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        let removed = self.tasks.remove(idx);
        debug!(id, "task deleted");
        self.persist_tasks()?;
        Ok(removed)
    }

    /// Empty the collection once `confirm` accepts the prompt.
    pub fn clear_all(&mut self, confirm: impl FnOnce(&str) -> bool) -> Result<ClearOutcome> {
        if self.tasks.is_empty() {
            return Ok(ClearOutcome::AlreadyEmpty);
        }
        let count = self.tasks.len();
        if !confirm(&format!("确定要清空所有 {count} 个事项吗？此操作不可恢复！")) {
            return Ok(ClearOutcome::Declined);
        }
        self.tasks.clear();
        info!(count, "checklist cleared");
        self.persist_tasks()?;
        Ok(ClearOutcome::Cleared(count))
    }

    /// Replace the whole collection. Ids stay monotonic across replacements.
    pub fn replace_all(&mut self, items: Vec<ChecklistItem>) -> Result<usize> {
        let mut tasks = Vec::with_capacity(items.len());
        for item in items {
            let mut task = Task::new(self.allocate_id(), item.text);
            task.done = item.done;
            tasks.push(task);
        }
        self.tasks = tasks;
        self.persist_tasks()?;
        Ok(self.tasks.len())
    }

    /// Add `name` to the category set, persisting only when it was new.
    pub fn register_category(&mut self, name: &str) -> Result<bool> {
        if self.categories.iter().any(|c| c == name) {
            return Ok(false);
        }
        self.categories.push(name.to_string());
        debug!(category = name, "category registered");
        self.persist_categories()?;
        Ok(true)
    }

    /// Merge `names` in order, then persist the category set. Returns how
    /// many were new.
    pub fn merge_categories<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) -> Result<usize> {
        let mut added = 0;
        for name in names {
            if !self.categories.iter().any(|c| c == name) {
                self.categories.push(name.to_string());
                added += 1;
            }
        }
        self.persist_categories()?;
        Ok(added)
    }

    fn persist_tasks(&mut self) -> Result<()> {
        let records: Vec<TaskRecord> = self.tasks.iter().map(TaskRecord::from).collect();
        let data = serde_json::to_string(&records)?;
        self.kv.set(TASKS_KEY, &data)
    }

    fn persist_categories(&mut self) -> Result<()> {
        let data = serde_json::to_string(&self.categories)?;
        self.kv.set(CATEGORIES_KEY, &data)
    }
}

/// Trim `text` and join its non-blank lines with single spaces.
fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Read and decode an entry; undecodable values are treated as absent.
fn read_entry<S, T>(kv: &S, key: &str) -> Result<Option<T>>
where
    S: KeyValueStore,
    T: serde::de::DeserializeOwned,
{
    let Some(raw) = kv.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!(key, error = %e, "ignoring unreadable persisted entry");
            Ok(None)
        }
    }
}
