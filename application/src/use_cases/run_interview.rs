//! Run Interview use case
//!
//! Drives one interview through the loop state machine, then runs the
//! two-part analysis stage over the final transcript.
//!
//! Every participant invocation is awaited before the next begins: a
//! persona's view depends on the answers recorded earlier in the same
//! round, so the loop is strictly sequential by design. Failures are not
//! retried; the first one aborts the interview and propagates.

use crate::ports::generation::{
    GatewayError, GenerationGateway, GenerationRequest, ParticipantRole,
};
use crate::ports::progress::{InterviewProgress, NoProgress};
use panel_domain::{
    DomainError, InterviewMachine, InterviewPlan, InterviewResult, InterviewSession, LoopAction,
    ParseError, PersonaRoster, PromptTemplate, Report, SentimentAnalysis, parse_directive,
    parse_report, parse_sentiment,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running one interview
#[derive(Error, Debug)]
pub enum RunInterviewError {
    #[error("Generation failed for {role}: {source}")]
    Generation {
        role: String,
        #[source]
        source: GatewayError,
    },

    #[error("Schema violation in {role} output: {source}")]
    Schema {
        role: String,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Input for the RunInterview use case
#[derive(Debug)]
pub struct RunInterviewInput {
    pub plan: InterviewPlan,
    pub roster: PersonaRoster,
}

impl RunInterviewInput {
    pub fn new(plan: InterviewPlan, roster: PersonaRoster) -> Self {
        Self { plan, roster }
    }
}

/// Use case for running a single interview to completion
pub struct RunInterviewUseCase<G: GenerationGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: GenerationGateway + 'static> RunInterviewUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunInterviewInput,
    ) -> Result<InterviewResult, RunInterviewError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunInterviewInput,
        progress: &dyn InterviewProgress,
    ) -> Result<InterviewResult, RunInterviewError> {
        let RunInterviewInput { plan, roster } = input;

        info!(
            topic = plan.topic(),
            personas = roster.len(),
            "Starting interview"
        );
        progress.on_interview_start(plan.topic(), &roster);

        let mut session = InterviewSession::new(plan);
        let mut machine = InterviewMachine::new(roster.len());

        loop {
            match machine.next_action() {
                LoopAction::InvokeFacilitator => {
                    let view = PromptTemplate::facilitator_view(&session);
                    let response = self
                        .invoke(
                            ParticipantRole::Facilitator,
                            PromptTemplate::facilitator_system(),
                            view,
                        )
                        .await?;
                    let directive = parse_directive(&response).map_err(|source| {
                        RunInterviewError::Schema {
                            role: ParticipantRole::Facilitator.to_string(),
                            source,
                        }
                    })?;
                    debug!(should_end = directive.should_end, "Facilitator directive");
                    machine.apply_directive(directive)?;
                }
                LoopAction::RecordQuestion { question } => {
                    session.record_question(&question);
                    progress.on_question(session.transcript().rounds(), &question);
                    machine.apply_question_recorded()?;
                }
                LoopAction::InvokePersona {
                    question,
                    persona_index,
                } => {
                    let persona = roster.get(persona_index).ok_or_else(|| {
                        DomainError::InvalidTransition(format!(
                            "persona index {} out of roster range",
                            persona_index
                        ))
                    })?;

                    let system = PromptTemplate::persona_system(
                        persona,
                        &PromptTemplate::panel_context(&roster, persona.name()),
                    );
                    let view = PromptTemplate::persona_view(
                        persona,
                        &question,
                        session.transcript(),
                        session.topic(),
                    );
                    let answer = self
                        .invoke(
                            ParticipantRole::Persona(persona.name().to_string()),
                            system,
                            view,
                        )
                        .await?;

                    session.record_answer(persona, answer.as_str())?;
                    progress.on_answer(persona, &answer);
                    machine.apply_answer_recorded()?;
                }
                LoopAction::CloseRound { question } => {
                    session.close_round(&question);
                    machine.apply_round_closed(session.exhausted())?;
                }
                LoopAction::Finish => break,
            }
        }

        progress.on_interview_end();
        info!(
            rounds = session.transcript().rounds(),
            records = session.transcript().len(),
            "Interview terminated, running analysis"
        );

        // Both extractions read the same final transcript snapshot; the
        // session is not mutated past this point.
        progress.on_analysis_start();
        let sentiment = self.extract_sentiment(&session, &roster).await?;
        let report = self.extract_report(&session).await?;
        progress.on_analysis_complete();

        let topic = session.topic().to_string();
        let personas = roster.names().into_iter().map(String::from).collect();
        Ok(InterviewResult::new(
            topic,
            personas,
            session.into_transcript(),
            report,
            sentiment,
        ))
    }

    async fn invoke(
        &self,
        role: ParticipantRole,
        system_prompt: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Result<String, RunInterviewError> {
        let request = GenerationRequest::new(role.clone(), system_prompt, prompt);
        debug!(role = %role, "Invoking participant");
        self.gateway
            .generate(request)
            .await
            .map_err(|source| RunInterviewError::Generation {
                role: role.to_string(),
                source,
            })
    }

    async fn extract_sentiment(
        &self,
        session: &InterviewSession,
        roster: &PersonaRoster,
    ) -> Result<SentimentAnalysis, RunInterviewError> {
        let role = ParticipantRole::SentimentAnalyst;
        let view = PromptTemplate::sentiment_view(session.transcript(), roster);
        let response = self
            .invoke(role.clone(), PromptTemplate::sentiment_system(), view)
            .await?;

        parse_sentiment(&response, roster).map_err(|source| RunInterviewError::Schema {
            role: role.to_string(),
            source,
        })
    }

    async fn extract_report(
        &self,
        session: &InterviewSession,
    ) -> Result<Report, RunInterviewError> {
        let role = ParticipantRole::Summarizer;
        let view = PromptTemplate::summary_view(session.topic(), session.transcript());
        let response = self
            .invoke(role.clone(), PromptTemplate::summary_system(), view)
            .await?;

        parse_report(&response).map_err(|source| RunInterviewError::Schema {
            role: role.to_string(),
            source,
        })
    }
}
