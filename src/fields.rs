//! Filter selector for task views.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::task::Task;

/// Active view scope. Transient view state; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Uncategorized,
    Category(String),
}

impl Filter {
    /// Whether `task` belongs to this view. Category names match exactly.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Uncategorized => task.category().is_none(),
            Filter::Category(name) => task.category() == Some(name.as_str()),
        }
    }
}

impl FromStr for Filter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "all" => Filter::All,
            "uncategorized" => Filter::Uncategorized,
            other => Filter::Category(other.to_string()),
        })
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Uncategorized => f.write_str("uncategorized"),
            Filter::Category(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector() {
        assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!("uncategorized".parse::<Filter>().unwrap(), Filter::Uncategorized);
        assert_eq!("工作".parse::<Filter>().unwrap(), Filter::Category("工作".into()));
        assert_eq!(Filter::Category("学习".into()).to_string(), "学习");
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let task = Task::new(1, "[Work] ship it");
        assert!(Filter::Category("Work".into()).matches(&task));
        assert!(!Filter::Category("work".into()).matches(&task));
        assert!(!Filter::Uncategorized.matches(&task));
        assert!(Filter::All.matches(&task));
    }
}
