//! Presentation layer for persona-panel
//!
//! This crate contains the CLI definition, console output formatting,
//! persona display styling, progress reporting, and the application
//! configuration loader.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::loader::{AppConfig, ConfigLoader};
pub use output::console::ConsoleFormatter;
pub use output::style::{PanelStyles, PersonaStyle};
pub use progress::reporter::ConsoleReporter;
