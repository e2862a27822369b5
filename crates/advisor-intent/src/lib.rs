//! Keyword intent classification for the advisor.
//!
//! Maps free-text queries onto a fixed, ordered table of categories by
//! counting keyword substring hits, falling back to a generic answer when
//! nothing matches.

pub mod builtin;
pub mod classifier;
pub mod error;
pub mod knowledge;

pub use classifier::{CategoryScore, Classification, IntentClassifier};
pub use error::KnowledgeError;
pub use knowledge::{KnowledgeBase, DEFAULT_FALLBACK_ID};
