//! Interview loop state machine
//!
//! The machine separates deciding from doing: [`InterviewMachine::next_action`]
//! is a pure function of the current state, and the `apply_*` methods advance
//! the state after the loop driver has performed the corresponding side effect
//! (invoking a participant, appending to the transcript). This keeps the whole
//! turn sequence unit-testable with scripted directives and no generation
//! backend.
//!
//! State flow:
//!
//! ```text
//! AwaitingFacilitator -> QuestionPosed -> CollectingAnswers(0..n-1)
//!     -> RoundComplete -> AwaitingFacilitator | Terminated
//! ```

use crate::core::error::DomainError;
use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// The facilitator participant's structured per-turn decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilitatorDirective {
    /// The next question to pose; ignored when `should_end` is set
    pub next_question: String,
    /// True when the facilitator decides the interview is over
    pub should_end: bool,
}

/// States of the interview loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterviewState {
    /// Waiting for the facilitator's next directive
    AwaitingFacilitator,
    /// The facilitator posed a question; it is not yet on the transcript
    QuestionPosed { question: Question },
    /// Collecting answers, one persona at a time in roster order
    CollectingAnswers {
        question: Question,
        persona_index: usize,
    },
    /// Every persona answered; stop condition pending
    RoundComplete { question: Question },
    /// Terminal state
    Terminated,
}

impl InterviewState {
    fn name(&self) -> &'static str {
        match self {
            InterviewState::AwaitingFacilitator => "AwaitingFacilitator",
            InterviewState::QuestionPosed { .. } => "QuestionPosed",
            InterviewState::CollectingAnswers { .. } => "CollectingAnswers",
            InterviewState::RoundComplete { .. } => "RoundComplete",
            InterviewState::Terminated => "Terminated",
        }
    }
}

/// What the loop driver must do next, decided purely from the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopAction {
    /// Compose the facilitator view and invoke the facilitator participant
    InvokeFacilitator,
    /// Append the question to the transcript and asked list
    RecordQuestion { question: Question },
    /// Compose the persona view and invoke the persona at `persona_index`
    InvokePersona {
        question: Question,
        persona_index: usize,
    },
    /// Apply round bookkeeping and evaluate the stop condition
    CloseRound { question: Question },
    /// The interview is over
    Finish,
}

/// Drives one interview through its turn sequence.
#[derive(Debug)]
pub struct InterviewMachine {
    state: InterviewState,
    roster_size: usize,
}

impl InterviewMachine {
    /// Create a machine for a roster of `roster_size` personas.
    ///
    /// The roster is validated non-empty at construction time
    /// ([`crate::persona::PersonaRoster::new`]), so `roster_size >= 1`.
    pub fn new(roster_size: usize) -> Self {
        Self {
            state: InterviewState::AwaitingFacilitator,
            roster_size,
        }
    }

    pub fn state(&self) -> &InterviewState {
        &self.state
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, InterviewState::Terminated)
    }

    /// Pure decision: the next action for the loop driver.
    pub fn next_action(&self) -> LoopAction {
        match &self.state {
            InterviewState::AwaitingFacilitator => LoopAction::InvokeFacilitator,
            InterviewState::QuestionPosed { question } => LoopAction::RecordQuestion {
                question: question.clone(),
            },
            InterviewState::CollectingAnswers {
                question,
                persona_index,
            } => LoopAction::InvokePersona {
                question: question.clone(),
                persona_index: *persona_index,
            },
            InterviewState::RoundComplete { question } => LoopAction::CloseRound {
                question: question.clone(),
            },
            InterviewState::Terminated => LoopAction::Finish,
        }
    }

    /// Apply the facilitator's directive.
    ///
    /// `should_end` terminates without recording anything; otherwise the
    /// posed question must be non-empty.
    pub fn apply_directive(&mut self, directive: FacilitatorDirective) -> Result<(), DomainError> {
        self.expect_state("apply_directive", |s| {
            matches!(s, InterviewState::AwaitingFacilitator)
        })?;

        self.state = if directive.should_end {
            InterviewState::Terminated
        } else {
            InterviewState::QuestionPosed {
                question: Question::new(directive.next_question)?,
            }
        };
        Ok(())
    }

    /// The question has been appended; start collecting answers at index 0.
    pub fn apply_question_recorded(&mut self) -> Result<(), DomainError> {
        let InterviewState::QuestionPosed { question } = &self.state else {
            return self.transition_error("apply_question_recorded");
        };
        let question = question.clone();

        self.state = InterviewState::CollectingAnswers {
            question,
            persona_index: 0,
        };
        Ok(())
    }

    /// One persona's answer has been appended; advance to the next persona
    /// or complete the round.
    pub fn apply_answer_recorded(&mut self) -> Result<(), DomainError> {
        let InterviewState::CollectingAnswers {
            question,
            persona_index,
        } = &self.state
        else {
            return self.transition_error("apply_answer_recorded");
        };
        let question = question.clone();
        let next_index = persona_index + 1;

        self.state = if next_index >= self.roster_size {
            InterviewState::RoundComplete { question }
        } else {
            InterviewState::CollectingAnswers {
                question,
                persona_index: next_index,
            }
        };
        Ok(())
    }

    /// Round bookkeeping is done; `stop` is the evaluated stop condition.
    pub fn apply_round_closed(&mut self, stop: bool) -> Result<(), DomainError> {
        self.expect_state("apply_round_closed", |s| {
            matches!(s, InterviewState::RoundComplete { .. })
        })?;

        self.state = if stop {
            InterviewState::Terminated
        } else {
            InterviewState::AwaitingFacilitator
        };
        Ok(())
    }

    fn expect_state(
        &self,
        event: &str,
        accepts: impl Fn(&InterviewState) -> bool,
    ) -> Result<(), DomainError> {
        if accepts(&self.state) {
            Ok(())
        } else {
            Err(DomainError::InvalidTransition(format!(
                "{} in state {}",
                event,
                self.state.name()
            )))
        }
    }

    fn transition_error(&self, event: &str) -> Result<(), DomainError> {
        Err(DomainError::InvalidTransition(format!(
            "{} in state {}",
            event,
            self.state.name()
        )))
    }
}
