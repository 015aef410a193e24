//! CSV persona source
//!
//! Loads the persona roster from a CSV file with headers. Only `name` is
//! required; the description is composed from whichever of the profile
//! columns are present. Rows without a name are skipped before they reach
//! the domain.
//!
//! Recognized columns: `name`, `age`, `role`, `context`, `goals`,
//! `pain_points`, `tech_savvy`, `description`, `color`, `emoji`.

use crate::config::ConfigError;
use panel_domain::{Persona, PersonaRoster};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Loads persona rosters from CSV files
pub struct CsvPersonaSource;

impl CsvPersonaSource {
    /// Load a roster from a CSV file
    pub fn load(path: impl AsRef<Path>) -> Result<PersonaRoster, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::io(path, source))?;
        let roster = Self::parse(file)?;
        info!(
            path = %path.display(),
            personas = roster.len(),
            "Loaded persona roster"
        );
        Ok(roster)
    }

    /// Parse a roster from any CSV reader
    pub fn parse(reader: impl Read) -> Result<PersonaRoster, ConfigError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut personas = Vec::new();

        for row in csv_reader.deserialize() {
            let row: HashMap<String, String> = row?;

            let Some(name) = field(&row, "name") else {
                warn!("Skipping persona row without a name");
                continue;
            };

            let mut persona = Persona::new(name, build_description(&row))?;
            if let Some(color) = field(&row, "color") {
                persona = persona.with_color(color);
            }
            if let Some(emoji) = field(&row, "emoji") {
                persona = persona.with_emoji(emoji);
            }
            personas.push(persona);
        }

        Ok(PersonaRoster::new(personas)?)
    }
}

/// A trimmed, non-empty field value
fn field<'a>(row: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    row.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Compose a natural-language description from the profile columns
fn build_description(row: &HashMap<String, String>) -> String {
    let mut parts = Vec::new();

    match (field(row, "age"), field(row, "role")) {
        (Some(age), Some(role)) => parts.push(format!("{}-year-old {}", age, role)),
        (None, Some(role)) => parts.push(role.to_string()),
        _ => {}
    }

    if let Some(context) = field(row, "context") {
        parts.push(context.to_string());
    }
    if let Some(goals) = field(row, "goals") {
        parts.push(format!("Goals: {}", goals));
    }
    if let Some(pain_points) = field(row, "pain_points") {
        parts.push(format!("Pain points: {}", pain_points));
    }
    if let Some(tech) = field(row, "tech_savvy") {
        parts.push(format!("Tech-savvy: {}", tech));
    }
    if let Some(description) = field(row, "description") {
        parts.push(description.to_string());
    }

    parts.join("; ")
}
