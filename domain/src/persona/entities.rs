//! Persona entity

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Optional display styling supplied with a persona record.
///
/// Consumed by the presentation layer; personas without hints fall back
/// to a palette cycled over the roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleHints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

/// A simulated interview respondent with a fixed identity.
///
/// Created once from the persona source and immutable for the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    name: String,
    description: String,
    #[serde(default, skip_serializing_if = "style_is_empty")]
    style: StyleHints,
}

fn style_is_empty(style: &StyleHints) -> bool {
    style.color.is_none() && style.emoji.is_none()
}

impl Persona {
    /// Create a new persona with a non-empty name
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyPersonaName);
        }
        Ok(Self {
            name,
            description: description.into(),
            style: StyleHints::default(),
        })
    }

    /// Attach an explicit display color hint
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.style.color = Some(color.into());
        self
    }

    /// Attach an explicit display emoji hint
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.style.emoji = Some(emoji.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn style(&self) -> &StyleHints {
        &self.style
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_creation() {
        let p = Persona::new("Alice", "26-year-old marathon runner").unwrap();
        assert_eq!(p.name(), "Alice");
        assert_eq!(p.description(), "26-year-old marathon runner");
        assert!(p.style().color.is_none());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(Persona::new("", "desc").is_err());
        assert!(Persona::new("  ", "desc").is_err());
    }

    #[test]
    fn test_style_hints() {
        let p = Persona::new("Bob", "desk worker")
            .unwrap()
            .with_color("green")
            .with_emoji("💬");
        assert_eq!(p.style().color.as_deref(), Some("green"));
        assert_eq!(p.style().emoji.as_deref(), Some("💬"));
    }
}
