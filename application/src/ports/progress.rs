//! Progress notification port
//!
//! Defines the interface for reporting interview progress as it happens.
//! Implementations live in the presentation layer.

use panel_domain::{Persona, PersonaRoster, Question};

/// Callback for progress updates during interview execution
pub trait InterviewProgress: Send + Sync {
    /// Called when a question is posed (round is 1-based)
    fn on_question(&self, round: usize, question: &Question);

    /// Called when a persona's answer has been recorded
    fn on_answer(&self, persona: &Persona, answer: &str);

    /// Called once before the first facilitator turn
    fn on_interview_start(&self, _topic: &str, _roster: &PersonaRoster) {}

    /// Called when the loop reaches its terminal state
    fn on_interview_end(&self) {}

    /// Called before the two analysis extractions begin
    fn on_analysis_start(&self) {}

    /// Called after both analysis extractions completed
    fn on_analysis_complete(&self) {}

    /// Called before each batch item (position is 1-based)
    fn on_batch_item_start(&self, _position: usize, _total: usize, _topic: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl InterviewProgress for NoProgress {
    fn on_question(&self, _round: usize, _question: &Question) {}
    fn on_answer(&self, _persona: &Persona, _answer: &str) {}
}
