//! Error types for knowledge base construction.

use advisor_core::error::AdvisorError;

/// Errors from building or loading a knowledge base.
///
/// Classification itself cannot fail; these only surface while a table is
/// being validated.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("Duplicate category id: {0}")]
    DuplicateId(String),
    #[error("Category id cannot be empty")]
    EmptyId,
    #[error("Category {0} has no keywords")]
    NoKeywords(String),
    #[error("Category {0} contains an empty keyword")]
    EmptyKeyword(String),
    #[error("Keyword {keyword:?} in category {category} is not lowercase")]
    KeywordNotLowercase { category: String, keyword: String },
    #[error("Fallback category {0} must not have keywords")]
    FallbackHasKeywords(String),
    #[error("Fallback category {0} must not have an action")]
    FallbackHasAction(String),
    #[error("Knowledge file parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Core(#[from] AdvisorError),
}

impl From<toml::de::Error> for KnowledgeError {
    fn from(err: toml::de::Error) -> Self {
        KnowledgeError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for KnowledgeError {
    fn from(err: std::io::Error) -> Self {
        KnowledgeError::Core(AdvisorError::Io(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knowledge_error_display() {
        let err = KnowledgeError::DuplicateId("erp".to_string());
        assert_eq!(err.to_string(), "Duplicate category id: erp");

        let err = KnowledgeError::NoKeywords("ai".to_string());
        assert_eq!(err.to_string(), "Category ai has no keywords");

        let err = KnowledgeError::KeywordNotLowercase {
            category: "who_are_we".to_string(),
            keyword: "Swen Tech".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Keyword \"Swen Tech\" in category who_are_we is not lowercase"
        );

        let err = KnowledgeError::FallbackHasAction("default".to_string());
        assert_eq!(
            err.to_string(),
            "Fallback category default must not have an action"
        );
    }

    #[test]
    fn test_io_error_wraps_core() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: KnowledgeError = io_err.into();
        assert!(matches!(err, KnowledgeError::Core(AdvisorError::Io(_))));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_toml_error_is_parse() {
        let err: Result<toml::Value, _> = toml::from_str("x = [");
        let err: KnowledgeError = err.unwrap_err().into();
        assert!(matches!(err, KnowledgeError::Parse(_)));
    }
}
