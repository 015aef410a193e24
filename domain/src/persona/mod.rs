//! Persona entities and the interview roster

pub mod entities;
pub mod roster;

pub use entities::{Persona, StyleHints};
pub use roster::PersonaRoster;
