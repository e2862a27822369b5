//! The category table the classifier is constructed with.
//!
//! A [`KnowledgeBase`] is validated once at construction and is immutable
//! afterwards. Declaration order is preserved because the classifier's
//! tie-break depends on it.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use advisor_core::types::Category;

use crate::error::KnowledgeError;

/// Conventional id of the fallback category.
pub const DEFAULT_FALLBACK_ID: &str = "default";

/// Ordered, validated category table plus its fallback.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    categories: Vec<Category>,
    fallback: Category,
}

impl KnowledgeBase {
    /// Validate and build a knowledge base.
    ///
    /// `categories` keep the order given. `fallback` must have no keywords and
    /// no action, and its id must not be reused by any category.
    pub fn new(categories: Vec<Category>, fallback: Category) -> Result<Self, KnowledgeError> {
        if fallback.id.is_empty() {
            return Err(KnowledgeError::EmptyId);
        }
        if !fallback.keywords.is_empty() {
            return Err(KnowledgeError::FallbackHasKeywords(fallback.id));
        }
        if fallback.action.is_some() {
            return Err(KnowledgeError::FallbackHasAction(fallback.id));
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(categories.len() + 1);
        seen.insert(fallback.id.as_str());

        for category in &categories {
            if category.id.is_empty() {
                return Err(KnowledgeError::EmptyId);
            }
            if !seen.insert(category.id.as_str()) {
                return Err(KnowledgeError::DuplicateId(category.id.clone()));
            }
            validate_keywords(category)?;
        }

        Ok(Self {
            categories,
            fallback,
        })
    }

    /// Build from a table already known to satisfy the invariants.
    pub(crate) fn new_unchecked(categories: Vec<Category>, fallback: Category) -> Self {
        Self {
            categories,
            fallback,
        }
    }

    /// Parse a TOML knowledge file.
    ///
    /// ```toml
    /// [fallback]
    /// answer = "How can I help?"
    ///
    /// [[categories]]
    /// id = "erp"
    /// keywords = ["erp", "factory"]
    /// answer = "..."
    /// action = { label = "View Case Study", link = "portfolio.html" }
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, KnowledgeError> {
        let file: KnowledgeFile = toml::from_str(content)?;
        Self::new(
            file.categories,
            Category::fallback(file.fallback.id, file.fallback.answer),
        )
    }

    /// Load and validate a TOML knowledge file from disk.
    pub fn load(path: &Path) -> Result<Self, KnowledgeError> {
        let content = std::fs::read_to_string(path)?;
        let kb = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            categories = kb.len(),
            "Knowledge base loaded"
        );
        Ok(kb)
    }

    /// Keyword-bearing categories in declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The category returned when nothing matches.
    pub fn fallback(&self) -> &Category {
        &self.fallback
    }

    /// Look up any category, including the fallback, by id.
    pub fn get(&self, id: &str) -> Option<&Category> {
        if self.fallback.id == id {
            return Some(&self.fallback);
        }
        self.categories.iter().find(|c| c.id == id)
    }

    /// Number of keyword-bearing categories (the fallback is not counted).
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn validate_keywords(category: &Category) -> Result<(), KnowledgeError> {
    if category.keywords.is_empty() {
        return Err(KnowledgeError::NoKeywords(category.id.clone()));
    }
    for keyword in &category.keywords {
        if keyword.is_empty() {
            return Err(KnowledgeError::EmptyKeyword(category.id.clone()));
        }
        if keyword.to_lowercase() != *keyword {
            return Err(KnowledgeError::KeywordNotLowercase {
                category: category.id.clone(),
                keyword: keyword.clone(),
            });
        }
    }
    Ok(())
}

// =============================================================================
// On-disk representation
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KnowledgeFile {
    fallback: FallbackEntry,
    #[serde(default)]
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FallbackEntry {
    #[serde(default = "default_fallback_id")]
    id: String,
    answer: String,
}

fn default_fallback_id() -> String {
    DEFAULT_FALLBACK_ID.to_string()
}
