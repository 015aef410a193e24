//! Application configuration

pub mod loader;

pub use loader::{AppConfig, ConfigLoader, InterviewDefaults, ModelsConfig, OutputConfig};
