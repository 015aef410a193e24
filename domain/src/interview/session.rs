//! Interview session entity and result value object

use crate::core::error::DomainError;
use crate::core::question::Question;
use crate::persona::entities::Persona;
use crate::report::entities::{Report, SentimentAnalysis};
use crate::transcript::store::Transcript;
use serde::{Deserialize, Serialize};

/// The plan for one interview: topic, the ordered core questions, and the
/// follow-up budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewPlan {
    topic: String,
    core_questions: Vec<Question>,
    max_followups: u32,
}

impl InterviewPlan {
    /// Create a plan, validating that the topic is non-empty and at least
    /// one core question is present
    pub fn new(
        topic: impl Into<String>,
        core_questions: Vec<Question>,
        max_followups: u32,
    ) -> Result<Self, DomainError> {
        let topic = topic.into();
        if topic.trim().is_empty() {
            return Err(DomainError::EmptyTopic);
        }
        if core_questions.is_empty() {
            return Err(DomainError::NoCoreQuestions);
        }
        Ok(Self {
            topic,
            core_questions,
            max_followups,
        })
    }

    /// Replace the follow-up budget (CLI override)
    pub fn with_max_followups(mut self, max_followups: u32) -> Self {
        self.max_followups = max_followups;
        self
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn core_questions(&self) -> &[Question] {
        &self.core_questions
    }

    pub fn max_followups(&self) -> u32 {
        self.max_followups
    }

    fn is_core(&self, question: &Question) -> bool {
        self.core_questions.iter().any(|q| q == question)
    }
}

/// Mutable state of one running interview.
///
/// The interview loop appends turn records and counters through the
/// methods here; once the loop terminates the session is consumed by the
/// analysis stage.
#[derive(Debug)]
pub struct InterviewSession {
    plan: InterviewPlan,
    transcript: Transcript,
    asked_questions: Vec<String>,
    followups_used: u32,
}

impl InterviewSession {
    pub fn new(plan: InterviewPlan) -> Self {
        Self {
            plan,
            transcript: Transcript::new(),
            asked_questions: Vec::new(),
            followups_used: 0,
        }
    }

    pub fn plan(&self) -> &InterviewPlan {
        &self.plan
    }

    pub fn topic(&self) -> &str {
        self.plan.topic()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn asked_questions(&self) -> &[String] {
        &self.asked_questions
    }

    pub fn followups_used(&self) -> u32 {
        self.followups_used
    }

    /// Core questions not yet posed, in plan order
    pub fn unasked_core_questions(&self) -> Vec<&Question> {
        self.plan
            .core_questions
            .iter()
            .filter(|q| !self.asked_questions.iter().any(|asked| asked == q.as_str()))
            .collect()
    }

    /// Record a posed question in the transcript and the asked list
    pub fn record_question(&mut self, question: &Question) {
        self.transcript.push_question(question.clone());
        self.asked_questions.push(question.as_str().to_string());
    }

    /// Record one persona's answer to the current question
    pub fn record_answer(
        &mut self,
        persona: &Persona,
        text: impl Into<String>,
    ) -> Result<(), DomainError> {
        self.transcript.push_answer(persona, text)
    }

    /// Round bookkeeping: a question outside the core list consumes one
    /// unit of follow-up budget. Re-asked core questions consume nothing;
    /// the total-asked bound below still guarantees termination.
    pub fn close_round(&mut self, question: &Question) {
        if !self.plan.is_core(question) {
            self.followups_used += 1;
        }
    }

    /// Stop condition, evaluated after each completed round
    pub fn exhausted(&self) -> bool {
        let total_bound = self.plan.core_questions.len() + self.plan.max_followups as usize;
        self.followups_used >= self.plan.max_followups
            || self.asked_questions.len() >= total_bound
    }

    /// Consume the session, yielding the final transcript snapshot
    pub fn into_transcript(self) -> Transcript {
        self.transcript
    }
}

/// Immutable outcome of one completed interview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewResult {
    /// The interview topic
    pub topic: String,
    /// Roster persona names, in answer order
    pub personas: Vec<String>,
    /// The full ordered transcript
    pub transcript: Transcript,
    /// Go/no-go market summary
    pub report: Report,
    /// Per-persona sentiment breakdown
    pub sentiment: SentimentAnalysis,
}

impl InterviewResult {
    pub fn new(
        topic: impl Into<String>,
        personas: Vec<String>,
        transcript: Transcript,
        report: Report,
        sentiment: SentimentAnalysis,
    ) -> Self {
        Self {
            topic: topic.into(),
            personas,
            transcript,
            report,
            sentiment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(core: &[&str], max_followups: u32) -> InterviewPlan {
        InterviewPlan::new(
            "A smart water bottle",
            core.iter().map(|q| Question::new(*q).unwrap()).collect(),
            max_followups,
        )
        .unwrap()
    }

    #[test]
    fn test_plan_validation() {
        assert!(matches!(
            InterviewPlan::new("", vec![Question::new("Q").unwrap()], 2),
            Err(DomainError::EmptyTopic)
        ));
        assert!(matches!(
            InterviewPlan::new("topic", vec![], 2),
            Err(DomainError::NoCoreQuestions)
        ));
    }

    #[test]
    fn test_unasked_core_questions_shrink() {
        let mut session = InterviewSession::new(plan(&["Q1", "Q2"], 2));
        assert_eq!(session.unasked_core_questions().len(), 2);

        session.record_question(&Question::new("Q1").unwrap());
        let unasked = session.unasked_core_questions();
        assert_eq!(unasked.len(), 1);
        assert_eq!(unasked[0].as_str(), "Q2");
    }

    #[test]
    fn test_followup_budget_only_for_non_core() {
        let mut session = InterviewSession::new(plan(&["Q1"], 2));

        session.close_round(&Question::new("Q1").unwrap());
        assert_eq!(session.followups_used(), 0);

        session.close_round(&Question::new("Tell me more").unwrap());
        assert_eq!(session.followups_used(), 1);
    }

    #[test]
    fn test_exhausted_by_followup_budget() {
        let mut session = InterviewSession::new(plan(&["Q1", "Q2"], 1));
        assert!(!session.exhausted());

        session.record_question(&Question::new("Q1").unwrap());
        session.close_round(&Question::new("Q1").unwrap());
        assert!(!session.exhausted());

        let followup = Question::new("Why though?").unwrap();
        session.record_question(&followup);
        session.close_round(&followup);
        assert!(session.exhausted());
    }

    #[test]
    fn test_exhausted_by_total_asked_bound() {
        // Re-asking core questions never consumes budget but still counts
        // against the total bound, so the loop cannot run forever.
        let mut session = InterviewSession::new(plan(&["Q1"], 3));
        let q1 = Question::new("Q1").unwrap();

        for _ in 0..4 {
            session.record_question(&q1);
            session.close_round(&q1);
        }
        assert_eq!(session.followups_used(), 0);
        assert!(session.exhausted());
    }

    #[test]
    fn test_zero_followups_stops_after_first_round() {
        let mut session = InterviewSession::new(plan(&["Q1", "Q2"], 0));
        let q1 = Question::new("Q1").unwrap();
        session.record_question(&q1);
        session.close_round(&q1);
        assert!(session.exhausted());
    }
}
