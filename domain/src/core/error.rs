//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Persona roster is empty")]
    EmptyRoster,

    #[error("Duplicate persona name: {0}")]
    DuplicatePersona(String),

    #[error("Persona name cannot be empty")]
    EmptyPersonaName,

    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Interview topic cannot be empty")]
    EmptyTopic,

    #[error("Interview has no core questions")]
    NoCoreQuestions,

    #[error("Answer recorded before any question was posed")]
    AnswerBeforeQuestion,

    #[error("Invalid interview transition: {0}")]
    InvalidTransition(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::EmptyRoster.to_string(),
            "Persona roster is empty"
        );
        assert_eq!(
            DomainError::DuplicatePersona("Alice".to_string()).to_string(),
            "Duplicate persona name: Alice"
        );
    }
}
