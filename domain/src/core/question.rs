//! Question value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question posed by the facilitator (Value Object)
///
/// The text is guaranteed non-empty; the facilitator contract rejects
/// directives that pose a blank question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question {
    text: String,
}

impl Question {
    /// Create a new question, rejecting empty or whitespace-only text
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::EmptyQuestion);
        }
        Ok(Self { text })
    }

    /// Get the question text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume and return the inner text
    pub fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("What is your initial reaction?").unwrap();
        assert_eq!(q.as_str(), "What is your initial reaction?");
    }

    #[test]
    fn test_empty_question_rejected() {
        assert!(Question::new("").is_err());
        assert!(Question::new("   ").is_err());
    }

    #[test]
    fn test_question_display() {
        let q = Question::new("Why?").unwrap();
        assert_eq!(q.to_string(), "Why?");
    }
}
