use serde::{Deserialize, Serialize};

// =============================================================================
// Category
// =============================================================================

/// Suggested follow-up affordance attached to a category's answer.
///
/// The chat surface renders this as a clickable element labelled `label`
/// that navigates to `link`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryAction {
    pub label: String,
    pub link: String,
}

impl CategoryAction {
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
        }
    }
}

/// A named bucket of keywords plus the canned response it produces.
///
/// Keywords are lowercase literal substrings. A fallback category has no
/// keywords and no action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique key within a knowledge base.
    pub id: String,
    /// Ordered keyword list; empty only for the fallback.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Display string returned verbatim.
    pub answer: String,
    /// Optional call-to-action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<CategoryAction>,
}

impl Category {
    /// Build a keyword-bearing category.
    pub fn new<I, S>(id: impl Into<String>, keywords: I, answer: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            answer: answer.into(),
            action: None,
        }
    }

    /// Build a fallback category: no keywords, no action.
    pub fn fallback(id: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            keywords: Vec::new(),
            answer: answer.into(),
            action: None,
        }
    }

    /// Attach a call-to-action.
    pub fn with_action(mut self, label: impl Into<String>, link: impl Into<String>) -> Self {
        self.action = Some(CategoryAction::new(label, link));
        self
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }
}
