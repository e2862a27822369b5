use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use advisor_core::types::CategoryAction;

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// A single rendered message bubble.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub text: String,
    /// Follow-up affordance shown under assistant answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<CategoryAction>,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            text: text.into(),
            action: None,
            created_at: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>, action: Option<CategoryAction>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            text: text.into(),
            action,
            created_at: Utc::now(),
        }
    }
}

/// The assistant's answer to one prepared query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    /// Id of the category that produced the answer.
    pub category_id: String,
    /// True when no keyword matched and the fallback answered.
    pub fallback: bool,
    pub message: ChatMessage,
}

/// A user message and the reply it produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub user: ChatMessage,
    pub reply: Reply,
}
