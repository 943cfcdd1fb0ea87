//! Category extraction and filtered views.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::fields::Filter;
use crate::task::Task;

static CATEGORY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]").expect("valid category regex"));

/// Inner content of the first bracketed token in `text`, at any position.
///
/// Empty brackets (`[]`) are not a category marker.
pub fn extract_category(text: &str) -> Option<&str> {
    CATEGORY_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Tasks matching `filter`, in collection order.
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: &Filter) -> Vec<&'a Task> {
    tasks.iter().filter(|t| filter.matches(t)).collect()
}
