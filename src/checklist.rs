//! Checklist document codec.
//!
//! Document layout:
//!
//! ```text
//! # 清单
//!
//! ## 待办事项 (<pending>)
//! - [ ] <text>
//!
//! ## 已完成 (<done>)
//! - [x] <text>
//! ```
//!
//! The completed section is left out entirely when nothing is done. Task text
//! is written verbatim, bracketed category markers included.

use chrono::{DateTime, TimeZone};
use tracing::info;

use crate::error::Result;
use crate::kv::KeyValueStore;
use crate::store::TaskStore;
use crate::task::Task;

const PENDING_MARK: &str = "- [ ] ";
const DONE_MARKS: [&str; 2] = ["- [x] ", "- [X] "];

/// One item recovered from a checklist document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub text: String,
    pub done: bool,
}

/// Result of an import request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The collection was replaced by this many items.
    Replaced(usize),
    /// The document held no checklist lines; the store was left untouched.
    NothingToImport,
    Declined,
}

/// Render `tasks` as a checklist document.
pub fn export(tasks: &[Task]) -> String {
    let (done, pending): (Vec<&Task>, Vec<&Task>) = tasks.iter().partition(|t| t.done);

    let mut doc = String::from("# 清单\n\n");
    doc.push_str(&format!("## 待办事项 ({})\n", pending.len()));
    for task in &pending {
        doc.push_str(PENDING_MARK);
        doc.push_str(task.text());
        doc.push('\n');
    }

    if !done.is_empty() {
        doc.push_str(&format!("\n## 已完成 ({})\n", done.len()));
        for task in &done {
            doc.push_str(DONE_MARKS[0]);
            doc.push_str(task.text());
            doc.push('\n');
        }
    }
    doc
}

/// Recover checklist items from `document`. Unrecognised lines are skipped.
pub fn parse(document: &str) -> Vec<ChecklistItem> {
    document
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if let Some(text) = line.strip_prefix(PENDING_MARK) {
                return Some(ChecklistItem { text: text.to_string(), done: false });
            }
            DONE_MARKS
                .iter()
                .find_map(|mark| line.strip_prefix(*mark))
                .map(|text| ChecklistItem { text: text.to_string(), done: true })
        })
        .collect()
}

/// Replace the store's collection with the items in `document`, once
/// `confirm` accepts the prompt.
pub fn import<S: KeyValueStore>(
    store: &mut TaskStore<S>,
    document: &str,
    confirm: impl FnOnce(&str) -> bool,
) -> Result<ImportOutcome> {
    let items = parse(document);
    if items.is_empty() {
        return Ok(ImportOutcome::NothingToImport);
    }
    if !confirm(&format!("将导入 {} 个事项，是否覆盖现有清单？", items.len())) {
        return Ok(ImportOutcome::Declined);
    }
    let count = store.replace_all(items)?;
    info!(count, "checklist imported");
    Ok(ImportOutcome::Replaced(count))
}

/// Default export file name, e.g. `清单_2024-05-01_09-30-00.md`.
pub fn export_file_name<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("清单_%Y-%m-%d_%H-%M-%S.md").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;
    use crate::kv::MemoryStore;
    use crate::store::{CATEGORIES_KEY, TASKS_KEY};

    const SCENARIO_DOC: &str = "# 清单\n\n## 待办事项 (1)\n- [ ] [工作] A\n\n## 已完成 (1)\n- [x] [学习] B\n";

    fn store_with(texts: &[(&str, bool)]) -> TaskStore<MemoryStore> {
        let kv = MemoryStore::new()
            .with_entry(TASKS_KEY, "[]")
            .with_entry(CATEGORIES_KEY, "[]");
        let mut store = TaskStore::open(kv).unwrap();
        for (text, done) in texts {
            let id = store.add(text).unwrap().unwrap();
            if *done {
                store.toggle_done(id).unwrap();
            }
        }
        store
    }

    fn pairs(tasks: &[Task]) -> Vec<(String, bool)> {
        tasks.iter().map(|t| (t.text().to_string(), t.done)).collect()
    }

    #[test]
    fn test_export_exact_document() {
        let store = store_with(&[("[工作] A", false), ("[学习] B", true)]);
        assert_eq!(export(store.tasks()), SCENARIO_DOC);
    }

    #[test]
    fn test_export_omits_empty_completed_section() {
        let store = store_with(&[("写日记", false)]);
        assert_eq!(export(store.tasks()), "# 清单\n\n## 待办事项 (1)\n- [ ] 写日记\n");
        assert_eq!(export(&[]), "# 清单\n\n## 待办事项 (0)\n");
    }

    #[test]
    fn test_import_scenario_document() {
        let mut store = store_with(&[("旧事项", false)]);
        let outcome = import(&mut store, SCENARIO_DOC, |_| true).unwrap();
        assert_eq!(outcome, ImportOutcome::Replaced(2));
        assert_eq!(
            pairs(store.tasks()),
            vec![("[工作] A".to_string(), false), ("[学习] B".to_string(), true)]
        );
        assert_eq!(store.tasks()[0].category(), Some("工作"));
    }

    #[test]
    fn test_round_trip_preserves_pending_then_done_order() {
        let store = store_with(&[
            ("[工作] 回复邮件", false),
            ("写日记 [生活]", false),
            ("[] 空括号", false),
            ("[学习] 复习笔记", true),
            ("计划旅行", true),
        ]);
        let doc = export(store.tasks());
        let mut target = store_with(&[]);
        import(&mut target, &doc, |_| true).unwrap();
        assert_eq!(pairs(target.tasks()), pairs(store.tasks()));

        // Importing the same document again replaces rather than merges.
        import(&mut target, &doc, |_| true).unwrap();
        assert_eq!(pairs(target.tasks()), pairs(store.tasks()));
    }

    #[test]
    fn test_round_trip_multi_line_input() {
        let store = store_with(&[("[工作] 第一行\n第二行", false), ("备注\r\n补充", true)]);
        let doc = export(store.tasks());
        assert_eq!(doc.lines().filter(|l| l.starts_with("- [")).count(), 2);

        let mut target = store_with(&[]);
        import(&mut target, &doc, |_| true).unwrap();
        assert_eq!(pairs(target.tasks()), pairs(store.tasks()));
        assert_eq!(target.tasks()[0].text(), "[工作] 第一行 第二行");
    }

    #[test]
    fn test_parse_recognised_lines_only() {
        let doc = "intro\n  - [X] 大写完成  \r\n- [ ] 待办\n-[ ] 不是\n- [x]\n* [ ] 也不是\n";
        assert_eq!(
            parse(doc),
            vec![
                ChecklistItem { text: "大写完成".into(), done: true },
                ChecklistItem { text: "待办".into(), done: false },
            ]
        );
    }

    #[test]
    fn test_import_nothing_leaves_store_untouched() {
        let mut store = store_with(&[("保留", false)]);
        let writes = store.kv().writes();
        let outcome = import(&mut store, "# 空\n\nno items here\n", |_| panic!("not asked")).unwrap();
        assert_eq!(outcome, ImportOutcome::NothingToImport);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.kv().writes(), writes);
    }

    #[test]
    fn test_import_declined() {
        let mut store = store_with(&[("保留", false)]);
        let outcome = import(&mut store, SCENARIO_DOC, |prompt| {
            assert!(prompt.contains('2'));
            false
        })
        .unwrap();
        assert_eq!(outcome, ImportOutcome::Declined);
        assert_eq!(pairs(store.tasks()), vec![("保留".to_string(), false)]);
    }

    #[test]
    fn test_export_file_name() {
        let now = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 3, 7)
            .unwrap()
            .and_utc();
        assert_eq!(export_file_name(&now), "清单_2024-05-01_09-03-07.md");
        assert!(export_file_name(&Utc::now()).ends_with(".md"));
    }
}
