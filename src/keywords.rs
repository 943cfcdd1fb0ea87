//! Ordered keyword → category table used for category inference.
//!
//! The table is an explicit ordered list of pairs. When a text contains more
//! than one keyword, the pair registered first wins.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Built-in table substituted whenever the keyword resource cannot be loaded.
pub const BUILTIN_KEYWORDS: &[(&str, &str)] = &[
    ("买菜", "购物"),
    ("购物", "购物"),
    ("超市", "购物"),
    ("买东西", "购物"),
    ("缴费", "账单"),
    ("电费", "账单"),
    ("水费", "账单"),
    ("燃气费", "账单"),
    ("话费", "账单"),
    ("信用卡", "账单"),
    ("还款", "账单"),
    ("工作", "工作"),
    ("任务", "工作"),
    ("项目", "工作"),
    ("会议", "工作"),
    ("学习", "学习"),
    ("看书", "学习"),
    ("阅读", "学习"),
    ("作业", "学习"),
    ("考试", "学习"),
    ("运动", "健康"),
    ("健身", "健康"),
    ("跑步", "健康"),
    ("锻炼", "健康"),
    ("吃饭", "生活"),
    ("做饭", "生活"),
    ("家务", "生活"),
    ("打扫", "生活"),
    ("洗衣服", "生活"),
    ("电影", "娱乐"),
    ("游戏", "娱乐"),
    ("音乐", "娱乐"),
    ("旅行", "旅行"),
    ("旅游", "旅行"),
    ("出差", "旅行"),
];

/// Immutable, ordered keyword table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordIndex {
    pairs: Vec<(String, String)>,
}

impl KeywordIndex {
    /// Build a table from pairs, keeping their order.
    pub fn from_pairs<K, C>(pairs: impl IntoIterator<Item = (K, C)>) -> Self
    where
        K: Into<String>,
        C: Into<String>,
    {
        KeywordIndex {
            pairs: pairs.into_iter().map(|(k, c)| (k.into(), c.into())).collect(),
        }
    }

    /// The built-in fallback table.
    pub fn builtin() -> Self {
        KeywordIndex::from_pairs(BUILTIN_KEYWORDS.iter().copied())
    }

    /// Parse a JSON object mapping keyword → category, keeping member order.
    pub fn from_json(doc: &str) -> Result<Self> {
        let map: Map<String, Value> = serde_json::from_str(doc)?;
        let mut pairs = Vec::with_capacity(map.len());
        for (keyword, category) in map {
            match category {
                Value::String(category) => pairs.push((keyword, category)),
                other => {
                    return Err(Error::InvalidKeywords(format!(
                        "keyword '{keyword}' maps to {other}, expected a string"
                    )))
                }
            }
        }
        Ok(KeywordIndex { pairs })
    }

    /// Load the keyword resource at `path`, falling back to the built-in
    /// table on any failure. Never fails.
    pub fn load(path: &Path) -> Self {
        let loaded = fs::read_to_string(path)
            .map_err(Error::from)
            .and_then(|doc| KeywordIndex::from_json(&doc));
        match loaded {
            Ok(index) => {
                info!(path = %path.display(), keywords = index.len(), "loaded keyword table");
                index
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "keyword table unavailable, using built-in table");
                KeywordIndex::builtin()
            }
        }
    }

    /// All `(keyword, category)` pairs in match order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Number of keywords in the table.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for (_, category) in &self.pairs {
            if !out.contains(&category.as_str()) {
                out.push(category);
            }
        }
        out
    }

    /// Category of the first pair whose keyword occurs literally in `text`.
    pub fn find(&self, text: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(keyword, _)| text.contains(keyword.as_str()))
            .map(|(_, category)| category.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_categories_in_first_seen_order() {
        let index = KeywordIndex::builtin();
        assert_eq!(
            index.categories(),
            vec!["购物", "账单", "工作", "学习", "健康", "生活", "娱乐", "旅行"]
        );
    }

    #[test]
    fn test_first_registered_keyword_wins() {
        let index = KeywordIndex::builtin();
        assert_eq!(index.find("今天去买菜和洗衣服"), Some("购物"));

        let reversed = KeywordIndex::from_pairs([("洗衣服", "生活"), ("买菜", "购物")]);
        assert_eq!(reversed.find("今天去买菜和洗衣服"), Some("生活"));
        assert_eq!(reversed.find("写日记"), None);
    }

    #[test]
    fn test_from_json_keeps_document_order() {
        let index = KeywordIndex::from_json(r#"{"跑步": "健康", "代码": "工作", "散步": "健康"}"#).unwrap();
        assert_eq!(
            index.pairs(),
            &[
                ("跑步".to_string(), "健康".to_string()),
                ("代码".to_string(), "工作".to_string()),
                ("散步".to_string(), "健康".to_string()),
            ]
        );
        assert_eq!(index.categories(), vec!["健康", "工作"]);
    }

    #[test]
    fn test_from_json_rejects_non_string_category() {
        assert!(matches!(
            KeywordIndex::from_json(r#"{"跑步": 1}"#),
            Err(Error::InvalidKeywords(_))
        ));
        assert!(matches!(KeywordIndex::from_json("[1, 2]"), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_load_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("keywords.json");
        assert_eq!(KeywordIndex::load(&missing), KeywordIndex::builtin());

        fs::write(&missing, "{ not json").unwrap();
        assert_eq!(KeywordIndex::load(&missing), KeywordIndex::builtin());

        fs::write(&missing, r#"{"代码": "工作"}"#).unwrap();
        let index = KeywordIndex::load(&missing);
        assert_eq!(index.len(), 1);
        assert_eq!(index.find("写代码"), Some("工作"));
    }
}
