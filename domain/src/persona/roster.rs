//! Persona roster
//!
//! The ordered set of personas taking part in an interview. Roster order
//! is the answer order within every round.

use crate::core::error::DomainError;
use crate::persona::entities::Persona;
use std::collections::HashSet;

/// Ordered, non-empty collection of personas with unique names.
///
/// Constructed once per run and shared by every interview in a batch.
/// Uniqueness is enforced at construction, so the roster is only ever
/// built through [`PersonaRoster::new`].
#[derive(Debug, Clone)]
pub struct PersonaRoster {
    personas: Vec<Persona>,
}

impl PersonaRoster {
    /// Build a roster, validating that it is non-empty and names are unique
    pub fn new(personas: Vec<Persona>) -> Result<Self, DomainError> {
        if personas.is_empty() {
            return Err(DomainError::EmptyRoster);
        }

        let mut seen = HashSet::new();
        for persona in &personas {
            if !seen.insert(persona.name()) {
                return Err(DomainError::DuplicatePersona(persona.name().to_string()));
            }
        }

        Ok(Self { personas })
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    /// A roster is never empty by construction, so this always returns false.
    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Persona> {
        self.personas.iter()
    }

    /// Get the persona at a roster position
    pub fn get(&self, index: usize) -> Option<&Persona> {
        self.personas.get(index)
    }

    /// Look up a persona by name
    pub fn by_name(&self, name: &str) -> Option<&Persona> {
        self.personas.iter().find(|p| p.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name(name).is_some()
    }

    /// Persona names in roster order
    pub fn names(&self) -> Vec<&str> {
        self.personas.iter().map(|p| p.name()).collect()
    }
}
