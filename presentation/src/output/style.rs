//! Persona display styling
//!
//! Each persona gets a stable color and emoji for console rendering.
//! Explicit hints from the persona source win; everyone else picks up the
//! next entry of a fixed palette cycled over the roster order. The
//! mapping is computed once per roster and never mutated.

use colored::Color;
use panel_domain::PersonaRoster;
use std::collections::HashMap;

const COLOR_CYCLE: [Color; 10] = [
    Color::Blue,
    Color::Green,
    Color::Magenta,
    Color::Cyan,
    Color::Yellow,
    Color::Red,
    Color::BrightBlue,
    Color::BrightGreen,
    Color::BrightMagenta,
    Color::BrightCyan,
];

const EMOJI_CYCLE: [&str; 10] = ["💬", "🗣️", "👥", "👤", "🤔", "🧐", "😃", "🙂", "😉", "🤓"];

/// Display style resolved for one persona
#[derive(Debug, Clone, PartialEq)]
pub struct PersonaStyle {
    pub color: Color,
    pub emoji: String,
}

/// Memoized persona-name to style mapping for one roster
#[derive(Debug)]
pub struct PanelStyles {
    styles: HashMap<String, PersonaStyle>,
}

impl PanelStyles {
    /// Compute the style mapping for a roster
    pub fn assign(roster: &PersonaRoster) -> Self {
        let mut styles = HashMap::new();

        for (index, persona) in roster.iter().enumerate() {
            let color = persona
                .style()
                .color
                .as_deref()
                .and_then(parse_color)
                .unwrap_or(COLOR_CYCLE[index % COLOR_CYCLE.len()]);
            let emoji = persona
                .style()
                .emoji
                .clone()
                .unwrap_or_else(|| EMOJI_CYCLE[index % EMOJI_CYCLE.len()].to_string());

            styles.insert(persona.name().to_string(), PersonaStyle { color, emoji });
        }

        Self { styles }
    }

    /// Style for a persona, falling back to a neutral default
    pub fn for_persona(&self, name: &str) -> PersonaStyle {
        self.styles.get(name).cloned().unwrap_or(PersonaStyle {
            color: Color::White,
            emoji: "💬".to_string(),
        })
    }
}

/// Parse a color hint; unknown names fall back to the palette
fn parse_color(name: &str) -> Option<Color> {
    let normalized = name.trim().to_lowercase().replace(['_', '-'], " ");
    let color = match normalized.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "bright red" => Color::BrightRed,
        "bright green" => Color::BrightGreen,
        "bright yellow" => Color::BrightYellow,
        "bright blue" => Color::BrightBlue,
        "bright magenta" => Color::BrightMagenta,
        "bright cyan" => Color::BrightCyan,
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_domain::Persona;

    fn roster(personas: Vec<Persona>) -> PersonaRoster {
        PersonaRoster::new(personas).unwrap()
    }

    #[test]
    fn test_palette_cycles_over_roster_order() {
        let roster = roster(vec![
            Persona::new("A", "d").unwrap(),
            Persona::new("B", "d").unwrap(),
            Persona::new("C", "d").unwrap(),
        ]);
        let styles = PanelStyles::assign(&roster);

        assert_eq!(styles.for_persona("A").color, Color::Blue);
        assert_eq!(styles.for_persona("B").color, Color::Green);
        assert_eq!(styles.for_persona("C").color, Color::Magenta);
        assert_eq!(styles.for_persona("A").emoji, "💬");
    }

    #[test]
    fn test_explicit_hints_take_precedence() {
        let roster = roster(vec![
            Persona::new("A", "d")
                .unwrap()
                .with_color("bright_cyan")
                .with_emoji("🏃"),
            Persona::new("B", "d").unwrap(),
        ]);
        let styles = PanelStyles::assign(&roster);

        assert_eq!(styles.for_persona("A").color, Color::BrightCyan);
        assert_eq!(styles.for_persona("A").emoji, "🏃");
        // B still gets its positional palette entry
        assert_eq!(styles.for_persona("B").color, Color::Green);
    }

    #[test]
    fn test_unknown_hint_falls_back_to_palette() {
        let roster = roster(vec![
            Persona::new("A", "d").unwrap().with_color("chartreuse"),
        ]);
        let styles = PanelStyles::assign(&roster);
        assert_eq!(styles.for_persona("A").color, Color::Blue);
    }

    #[test]
    fn test_unknown_persona_gets_default() {
        let roster = roster(vec![Persona::new("A", "d").unwrap()]);
        let styles = PanelStyles::assign(&roster);
        let style = styles.for_persona("Mallory");
        assert_eq!(style.color, Color::White);
        assert_eq!(style.emoji, "💬");
    }

    #[test]
    fn test_palette_wraps_past_its_length() {
        let personas: Vec<Persona> = (0..12)
            .map(|i| Persona::new(format!("P{}", i), "d").unwrap())
            .collect();
        let roster = roster(personas);
        let styles = PanelStyles::assign(&roster);

        assert_eq!(styles.for_persona("P10").color, Color::Blue);
        assert_eq!(styles.for_persona("P11").color, Color::Green);
    }
}
