//! Turn records

use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// One entry in the interview transcript.
///
/// Records are appended in chronological order of production and never
/// mutated or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnRecord {
    /// A question posed by the facilitator
    Question { text: Question },
    /// One persona's answer to the most recent question
    Answer { persona: String, text: String },
}

impl TurnRecord {
    pub fn question(text: Question) -> Self {
        TurnRecord::Question { text }
    }

    pub fn answer(persona: impl Into<String>, text: impl Into<String>) -> Self {
        TurnRecord::Answer {
            persona: persona.into(),
            text: text.into(),
        }
    }

    pub fn is_question(&self) -> bool {
        matches!(self, TurnRecord::Question { .. })
    }

    pub fn is_answer(&self) -> bool {
        matches!(self, TurnRecord::Answer { .. })
    }
}
