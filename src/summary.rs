//! Aggregation of a filtered view into chart-ready numbers.
//!
//! Drawing is left to the caller; this module only produces counts, rates and
//! angles (radians, starting at 0 and growing clockwise in slice order).

use std::collections::HashMap;
use std::f64::consts::TAU;

use crate::fields::Filter;
use crate::task::Task;

/// Label used for tasks without a category in the distribution view.
pub const UNCATEGORIZED_LABEL: &str = "uncategorized";

/// One category's share of the distribution ring.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub count: usize,
    /// Individually rounded percentage, for display only.
    pub percent: u32,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Slice {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Summary {
    /// Nothing matched the filter.
    Empty,
    /// Per-category breakdown, produced for the `all` view.
    Distribution { total: usize, done: usize, slices: Vec<Slice> },
    /// Completion ratio, produced for category and `uncategorized` views.
    Completion { total: usize, done: usize },
}

impl Summary {
    pub fn total(&self) -> usize {
        match self {
            Summary::Empty => 0,
            Summary::Distribution { total, .. } | Summary::Completion { total, .. } => *total,
        }
    }

    /// Percentage of done tasks; 0 for an empty view.
    pub fn completion_rate(&self) -> u32 {
        match self {
            Summary::Empty => 0,
            Summary::Distribution { total, done, .. } | Summary::Completion { total, done } => {
                percent(*done, *total)
            }
        }
    }

    /// `(done_sweep, pending_sweep)` of the completion ring. Only the
    /// completion view has one.
    pub fn completion_ring(&self) -> Option<(f64, f64)> {
        match self {
            Summary::Completion { .. } => {
                let pending = TAU * (1.0 - f64::from(self.completion_rate()) / 100.0);
                Some((TAU - pending, pending))
            }
            _ => None,
        }
    }

    pub fn slices(&self) -> &[Slice] {
        match self {
            Summary::Distribution { slices, .. } => slices,
            _ => &[],
        }
    }
}

/// `round(part / total * 100)` with halves rounded up; 0 when `total` is 0.
pub fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * part + total) / (2 * total)) as u32
}

/// Summarize an already filtered view.
pub fn summarize(view: &[&Task], filter: &Filter) -> Summary {
    if view.is_empty() {
        return Summary::Empty;
    }
    let total = view.len();
    let done = view.iter().filter(|t| t.done).count();
    match filter {
        Filter::All => Summary::Distribution { total, done, slices: slices(view) },
        _ => Summary::Completion { total, done },
    }
}

fn slices(view: &[&Task]) -> Vec<Slice> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for task in view {
        let label = task.category().unwrap_or(UNCATEGORIZED_LABEL);
        match positions.get(label) {
            Some(&i) => counts[i].1 += 1,
            None => {
                positions.insert(label, counts.len());
                counts.push((label, 1));
            }
        }
    }

    // Angles come from cumulative counts, so the last slice ends exactly at TAU.
    let total = view.len();
    let mut seen = 0;
    counts
        .into_iter()
        .map(|(label, count)| {
            let start_angle = seen as f64 / total as f64 * TAU;
            seen += count;
            let end_angle = seen as f64 / total as f64 * TAU;
            Slice { label: label.to_string(), count, percent: percent(count, total), start_angle, end_angle }
        })
        .collect()
}
