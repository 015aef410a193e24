//! Transcript store
//!
//! Append-only ordered sequence of [`TurnRecord`]s plus the pure scans
//! the prompt composer and analysis stage are built on.

use crate::core::error::DomainError;
use crate::core::question::Question;
use crate::persona::entities::Persona;
use crate::transcript::record::TurnRecord;
use serde::{Deserialize, Serialize};

/// The complete ordered record of questions and answers for one interview.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    records: Vec<TurnRecord>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TurnRecord] {
        &self.records
    }

    /// The most recent `n` records, fewer if the transcript is shorter.
    pub fn recent(&self, n: usize) -> &[TurnRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    /// Number of questions posed so far
    pub fn rounds(&self) -> usize {
        self.records.iter().filter(|r| r.is_question()).count()
    }

    /// Append a question record
    pub fn push_question(&mut self, question: Question) {
        self.records.push(TurnRecord::question(question));
    }

    /// Append an answer record.
    ///
    /// Taking a [`Persona`] (rather than a bare name) keeps the invariant
    /// that every answer references a roster member. An answer with no
    /// preceding question is rejected.
    pub fn push_answer(
        &mut self,
        persona: &Persona,
        text: impl Into<String>,
    ) -> Result<(), DomainError> {
        if self.rounds() == 0 {
            return Err(DomainError::AnswerBeforeQuestion);
        }
        self.records.push(TurnRecord::answer(persona.name(), text));
        Ok(())
    }

    /// Peer answers to `question` already on record, excluding `exclude`.
    ///
    /// Scans forward from the latest question record matching `question`
    /// until the next question record or the end of the transcript. Using
    /// the latest occurrence keeps the scan anchored to the current round
    /// even when the facilitator re-asks an earlier question. Returns
    /// `(persona, answer)` pairs in answer order.
    pub fn peer_answers(&self, question: &str, exclude: &str) -> Vec<(&str, &str)> {
        let Some(start) = self.records.iter().rposition(
            |r| matches!(r, TurnRecord::Question { text } if text.as_str() == question),
        ) else {
            return Vec::new();
        };

        let mut answers = Vec::new();
        for record in &self.records[start + 1..] {
            match record {
                TurnRecord::Question { .. } => break,
                TurnRecord::Answer { persona, text } => {
                    if persona != exclude {
                        answers.push((persona.as_str(), text.as_str()));
                    }
                }
            }
        }
        answers
    }

    /// Every answer paired with the question it responded to, in order.
    ///
    /// Yields `(persona, question, answer)` triples; the analysis stage
    /// groups these per persona.
    pub fn answers_with_questions(&self) -> Vec<(&str, &str, &str)> {
        let mut current_question: Option<&str> = None;
        let mut triples = Vec::new();

        for record in &self.records {
            match record {
                TurnRecord::Question { text } => current_question = Some(text.as_str()),
                TurnRecord::Answer { persona, text } => {
                    if let Some(question) = current_question {
                        triples.push((persona.as_str(), question, text.as_str()));
                    }
                }
            }
        }
        triples
    }
}
