//! Console output formatting and persona styling

pub mod console;
pub mod style;

pub use console::ConsoleFormatter;
pub use style::{PanelStyles, PersonaStyle};

/// Globally enable or disable colored output
pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}
