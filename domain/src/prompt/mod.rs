//! Prompt composition
//!
//! Pure functions that derive bounded views of the transcript for each
//! participant and render them into generation requests.

pub mod template;

pub use template::PromptTemplate;
