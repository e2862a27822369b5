//! Chat assistant: the collaborator that feeds user input to the classifier.
//!
//! Trims and lowercases raw input, waits out the configured thinking delay,
//! and turns the winning category into an assistant message.

use std::time::Duration;

use tracing::{debug, info};

use advisor_core::config::{AdvisorConfig, ChatConfig};
use advisor_intent::{IntentClassifier, KnowledgeBase};

use crate::error::ChatError;
use crate::types::{ChatMessage, Exchange, Reply};

/// Stateless chat front end over an [`IntentClassifier`].
///
/// Nothing is remembered between messages.
#[derive(Debug, Clone)]
pub struct ChatAssistant {
    classifier: IntentClassifier,
    config: ChatConfig,
}

impl ChatAssistant {
    pub fn new(classifier: IntentClassifier, config: ChatConfig) -> Self {
        Self { classifier, config }
    }

    /// Build from application config, loading the configured knowledge file
    /// or the built-in table when none is set.
    pub fn from_config(config: &AdvisorConfig) -> Result<Self, ChatError> {
        let knowledge = match config.knowledge_path() {
            Some(path) => KnowledgeBase::load(&path)?,
            None => KnowledgeBase::builtin(),
        };
        info!(
            categories = knowledge.len(),
            fallback = %knowledge.fallback().id,
            "Chat assistant ready"
        );
        Ok(Self::new(
            IntentClassifier::new(knowledge),
            config.chat.clone(),
        ))
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Preset chip texts, in display order.
    pub fn suggestions(&self) -> &[String] {
        &self.config.suggestions
    }

    /// Text of the chip at `index` (zero-based).
    pub fn suggestion(&self, index: usize) -> Option<&str> {
        self.config.suggestions.get(index).map(String::as_str)
    }

    /// Normalize raw input into a classifiable query.
    ///
    /// Trims surrounding whitespace and lowercases. Empty input after trimming
    /// is rejected, as is input longer than `max_message_length` characters.
    pub fn prepare(&self, raw: &str) -> Result<String, ChatError> {
        if !self.config.enabled {
            return Err(ChatError::Disabled);
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if trimmed.chars().count() > self.config.max_message_length {
            return Err(ChatError::MessageTooLong(self.config.max_message_length));
        }

        Ok(trimmed.to_lowercase())
    }

    /// Classify a prepared query and compose the assistant's reply.
    pub fn respond(&self, query: &str) -> Reply {
        let result = self.classifier.explain(query);
        let category = result.category;

        debug!(
            category = %category.id,
            score = result.score,
            has_action = category.action.is_some(),
            "Composing reply"
        );

        Reply {
            category_id: category.id.clone(),
            fallback: result.is_fallback(),
            message: ChatMessage::assistant(category.answer.clone(), category.action.clone()),
        }
    }

    /// Handle a raw message without the thinking delay.
    pub fn handle_message_now(&self, raw: &str) -> Result<Exchange, ChatError> {
        let query = self.prepare(raw)?;
        let user = ChatMessage::user(query.clone());
        let reply = self.respond(&query);
        Ok(Exchange { user, reply })
    }

    /// Handle a raw message, pausing for the configured thinking delay
    /// between echoing the user and answering.
    pub async fn handle_message(&self, raw: &str) -> Result<Exchange, ChatError> {
        let query = self.prepare(raw)?;
        let user = ChatMessage::user(query.clone());

        if self.config.thinking_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.thinking_delay_ms)).await;
        }

        let reply = self.respond(&query);
        Ok(Exchange { user, reply })
    }
}

// =============================================================================
// Tests
// =============================================================================
