//! Keyword-count intent classifier.
//!
//! The query is lowercased, then each category scores one point per keyword
//! found anywhere in it as a plain substring. Matching is not word-bounded:
//! `"ai"` hits inside `"said"`. The highest score wins, ties go to the
//! earliest category, and an all-zero result selects the fallback.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use advisor_core::types::Category;

use crate::knowledge::KnowledgeBase;

/// Outcome of a classification with the winning score attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    pub category: &'a Category,
    /// Keyword hits of the winner; 0 when the fallback was selected.
    pub score: usize,
}

impl Classification<'_> {
    pub fn is_fallback(&self) -> bool {
        self.score == 0
    }
}

/// Per-category score, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub id: String,
    pub score: usize,
}

/// Stateless classifier over an immutable knowledge base.
///
/// Cheap to clone; the table is shared.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    knowledge: Arc<KnowledgeBase>,
}

impl IntentClassifier {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self {
            knowledge: Arc::new(knowledge),
        }
    }

    /// Classifier over the built-in site table.
    pub fn builtin() -> Self {
        Self::new(KnowledgeBase::builtin())
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Return the best-matching category for `query`.
    ///
    /// Total over all inputs: empty or unmatched queries get the fallback.
    pub fn classify(&self, query: &str) -> &Category {
        self.explain(query).category
    }

    /// Same selection as [`classify`](Self::classify), also reporting the
    /// winning score.
    pub fn explain(&self, query: &str) -> Classification<'_> {
        let normalized = query.to_lowercase();

        let mut best = self.knowledge.fallback();
        let mut max_score = 0;

        for category in self.knowledge.categories() {
            let score = keyword_hits(category, &normalized);
            // Strictly greater: the first category to reach a score keeps it.
            if score > max_score {
                max_score = score;
                best = category;
            }
        }

        debug!(category = %best.id, score = max_score, "Query classified");

        Classification {
            category: best,
            score: max_score,
        }
    }

    /// Score every keyword-bearing category against `query`.
    pub fn scores(&self, query: &str) -> Vec<CategoryScore> {
        let normalized = query.to_lowercase();
        self.knowledge
            .categories()
            .iter()
            .map(|category| CategoryScore {
                id: category.id.clone(),
                score: keyword_hits(category, &normalized),
            })
            .collect()
    }
}

/// Count the keywords of `category` contained in an already-lowercased query.
fn keyword_hits(category: &Category, normalized: &str) -> usize {
    category
        .keywords
        .iter()
        .filter(|keyword| normalized.contains(keyword.as_str()))
        .count()
}
