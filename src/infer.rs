//! Keyword-driven category inference and the input suggestion flow.

use crate::error::Result;
use crate::keywords::KeywordIndex;
use crate::kv::KeyValueStore;
use crate::store::TaskStore;

/// Suggests categories for free text using an ordered keyword table.
#[derive(Debug, Clone)]
pub struct CategoryInferenceEngine {
    index: KeywordIndex,
}

impl CategoryInferenceEngine {
    pub fn new(index: KeywordIndex) -> Self {
        CategoryInferenceEngine { index }
    }

    /// Category of the first keyword found in `text`.
    ///
    /// A matched category missing from the store's category set is
    /// registered there. Tasks are never touched.
    pub fn suggest<S: KeyValueStore>(
        &self,
        text: &str,
        store: &mut TaskStore<S>,
    ) -> Result<Option<String>> {
        let Some(category) = self.index.find(text) else {
            return Ok(None);
        };
        store.register_category(category)?;
        Ok(Some(category.to_string()))
    }
}

/// Draft text plus the suggestion currently offered for it.
#[derive(Debug, Default, Clone)]
pub struct Composer {
    draft: String,
    suggestion: Option<String>,
}

impl Composer {
    pub fn new() -> Self {
        Composer::default()
    }

    /// Current draft text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Category currently offered for the draft, if any.
    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// Replace the draft and recompute the suggestion. Drafts of one
    /// character or less (after trimming) get no suggestion.
    pub fn input<S: KeyValueStore>(
        &mut self,
        text: &str,
        engine: &CategoryInferenceEngine,
        store: &mut TaskStore<S>,
    ) -> Result<Option<&str>> {
        self.draft = text.to_string();
        self.suggestion = if text.trim().chars().count() > 1 {
            engine.suggest(text.trim(), store)?
        } else {
            None
        };
        Ok(self.suggestion())
    }

    /// Prefix the draft with `[Category] ` unless it already mentions the
    /// category, then drop the suggestion.
    pub fn accept(&mut self) {
        if let Some(category) = self.suggestion.take() {
            let text = self.draft.trim();
            if !text.is_empty() && !text.contains(category.as_str()) {
                self.draft = format!("[{category}] {text}");
            }
        }
    }

    /// Drop the current suggestion, leaving the draft as typed.
    pub fn dismiss(&mut self) {
        self.suggestion = None;
    }

    /// Add the draft as a task. On success the draft and suggestion reset.
    pub fn submit<S: KeyValueStore>(&mut self, store: &mut TaskStore<S>) -> Result<Option<u64>> {
        let id = store.add(&self.draft)?;
        if id.is_some() {
            self.draft.clear();
            self.suggestion = None;
        }
        Ok(id)
    }

    pub fn accept_and_submit<S: KeyValueStore>(
        &mut self,
        store: &mut TaskStore<S>,
    ) -> Result<Option<u64>> {
        self.accept();
        self.submit(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use crate::store::{CATEGORIES_KEY, TASKS_KEY};

    fn empty_store() -> TaskStore<MemoryStore> {
        let kv = MemoryStore::new()
            .with_entry(TASKS_KEY, "[]")
            .with_entry(CATEGORIES_KEY, "[]");
        TaskStore::open(kv).unwrap()
    }

    #[test]
    fn test_suggest_first_match() {
        let engine = CategoryInferenceEngine::new(KeywordIndex::builtin());
        let mut store = empty_store();
        assert_eq!(
            engine.suggest("今天去买菜和洗衣服", &mut store).unwrap().as_deref(),
            Some("购物")
        );
        assert_eq!(engine.suggest("写日记", &mut store).unwrap(), None);
    }

    #[test]
    fn test_suggest_is_deterministic() {
        let engine = CategoryInferenceEngine::new(KeywordIndex::builtin());
        let mut store = empty_store();
        let first = engine.suggest("下午开会议然后去健身", &mut store).unwrap();
        for _ in 0..5 {
            assert_eq!(engine.suggest("下午开会议然后去健身", &mut store).unwrap(), first);
        }
        assert_eq!(first.as_deref(), Some("工作"));
    }

    #[test]
    fn test_suggest_registers_unseen_category() {
        let engine = CategoryInferenceEngine::new(KeywordIndex::from_pairs([("代码", "编程")]));
        let mut store = empty_store();
        engine.suggest("写代码", &mut store).unwrap();
        engine.suggest("读代码", &mut store).unwrap();
        assert_eq!(store.categories(), &["编程"]);
        assert_eq!(store.kv().writes(), 1);
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_short_input_has_no_suggestion() {
        let engine = CategoryInferenceEngine::new(KeywordIndex::from_pairs([("书", "学习")]));
        let mut store = empty_store();
        let mut composer = Composer::new();
        assert_eq!(composer.input(" 书 ", &engine, &mut store).unwrap(), None);
        assert_eq!(composer.input("看书", &engine, &mut store).unwrap(), Some("学习"));
    }

    #[test]
    fn test_accept_prefixes_category() {
        let engine = CategoryInferenceEngine::new(KeywordIndex::builtin());
        let mut store = empty_store();
        let mut composer = Composer::new();
        composer.input(" 周末去超市 ", &engine, &mut store).unwrap();
        composer.accept();
        assert_eq!(composer.draft(), "[购物] 周末去超市");
        assert_eq!(composer.suggestion(), None);
    }

    #[test]
    fn test_accept_skips_text_already_naming_category() {
        let engine = CategoryInferenceEngine::new(KeywordIndex::builtin());
        let mut store = empty_store();
        let mut composer = Composer::new();
        composer.input("整理工作文档", &engine, &mut store).unwrap();
        assert_eq!(composer.suggestion(), Some("工作"));
        composer.accept();
        assert_eq!(composer.draft(), "整理工作文档");
    }

    #[test]
    fn test_dismiss_then_submit_keeps_text() {
        let engine = CategoryInferenceEngine::new(KeywordIndex::builtin());
        let mut store = empty_store();
        let mut composer = Composer::new();
        composer.input("去跑步", &engine, &mut store).unwrap();
        composer.dismiss();
        let id = composer.submit(&mut store).unwrap().unwrap();
        assert_eq!(store.get(id).unwrap().text(), "去跑步");
        assert_eq!(composer.draft(), "");
    }

    #[test]
    fn test_accept_and_submit() {
        let engine = CategoryInferenceEngine::new(KeywordIndex::builtin());
        let mut store = empty_store();
        let mut composer = Composer::new();
        composer.input("交电费", &engine, &mut store).unwrap();
        let id = composer.accept_and_submit(&mut store).unwrap().unwrap();
        let task = store.get(id).unwrap();
        assert_eq!(task.text(), "[账单] 交电费");
        assert_eq!(task.category(), Some("账单"));
        assert_eq!(composer.suggestion(), None);
    }
}
