//! Append-only interview transcript
//!
//! The transcript is the single source of truth for one interview. Every
//! downstream view (facilitator context, persona context, analysis input,
//! the exported artifact) is derived from it.

pub mod record;
pub mod store;

pub use record::TurnRecord;
pub use store::Transcript;
