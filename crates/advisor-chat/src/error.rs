//! Error types for the chat surface.

use advisor_intent::KnowledgeError;

/// Errors from handling a chat message.
///
/// Classification never fails; these cover input validation and setup.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat is disabled")]
    Disabled,
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("knowledge base error: {0}")]
    Knowledge(#[from] KnowledgeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        assert_eq!(ChatError::Disabled.to_string(), "chat is disabled");
        assert_eq!(ChatError::EmptyMessage.to_string(), "message cannot be empty");
        assert_eq!(
            ChatError::MessageTooLong(2000).to_string(),
            "message exceeds maximum length of 2000 characters"
        );
    }

    #[test]
    fn test_chat_error_from_knowledge_error() {
        let err: ChatError = KnowledgeError::DuplicateId("erp".to_string()).into();
        assert!(matches!(err, ChatError::Knowledge(_)));
        assert_eq!(
            err.to_string(),
            "knowledge base error: Duplicate category id: erp"
        );
    }

    #[test]
    fn test_errors_implement_debug() {
        let dbg = format!("{:?}", ChatError::MessageTooLong(1));
        assert!(dbg.contains("MessageTooLong"));
    }
}
