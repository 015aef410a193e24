//! Run Batch use case
//!
//! Repeats the interview loop + analysis stage across a list of plans
//! sharing one persona roster, strictly sequentially. A failure halts the
//! batch at the failing item; everything completed before it stays
//! available to the caller.

use crate::ports::artifact::{ArtifactError, ArtifactSink};
use crate::ports::generation::GenerationGateway;
use crate::ports::progress::{InterviewProgress, NoProgress};
use crate::use_cases::run_interview::{
    RunInterviewError, RunInterviewInput, RunInterviewUseCase,
};
use panel_domain::{InterviewPlan, InterviewResult, PersonaRoster};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// One finished interview plus the persisted artifact reference
#[derive(Debug)]
pub struct CompletedInterview {
    pub result: InterviewResult,
    pub artifact: PathBuf,
}

/// Where a batch item failed
#[derive(Error, Debug)]
pub enum BatchStepError {
    #[error(transparent)]
    Interview(#[from] RunInterviewError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

/// A halted batch: identifies the failing item and carries everything
/// completed before it, so earlier reports remain retrievable.
#[derive(Error, Debug)]
#[error("Interview '{topic}' (item {position} of {total}) failed: {source}")]
pub struct BatchError {
    pub topic: String,
    pub position: usize,
    pub total: usize,
    pub completed: Vec<CompletedInterview>,
    #[source]
    pub source: BatchStepError,
}

/// Input for the RunBatch use case.
///
/// A single interview is simply a batch of one.
#[derive(Debug)]
pub struct RunBatchInput {
    pub plans: Vec<InterviewPlan>,
    pub roster: PersonaRoster,
}

impl RunBatchInput {
    pub fn new(plans: Vec<InterviewPlan>, roster: PersonaRoster) -> Self {
        Self { plans, roster }
    }
}

/// Use case for running a batch of interviews over one roster
pub struct RunBatchUseCase<G: GenerationGateway + 'static> {
    interview: RunInterviewUseCase<G>,
    sink: Arc<dyn ArtifactSink>,
}

impl<G: GenerationGateway + 'static> RunBatchUseCase<G> {
    pub fn new(gateway: Arc<G>, sink: Arc<dyn ArtifactSink>) -> Self {
        Self {
            interview: RunInterviewUseCase::new(gateway),
            sink,
        }
    }

    /// Execute the batch with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunBatchInput,
    ) -> Result<Vec<CompletedInterview>, BatchError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the batch with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunBatchInput,
        progress: &dyn InterviewProgress,
    ) -> Result<Vec<CompletedInterview>, BatchError> {
        let RunBatchInput { plans, roster } = input;
        let total = plans.len();
        info!(total, "Starting interview batch");

        let mut completed = Vec::new();
        for (index, plan) in plans.into_iter().enumerate() {
            let topic = plan.topic().to_string();
            progress.on_batch_item_start(index + 1, total, &topic);

            match self.run_item(plan, roster.clone(), progress).await {
                Ok(item) => completed.push(item),
                Err(source) => {
                    warn!(topic = %topic, "Batch halted by failing interview");
                    return Err(BatchError {
                        topic,
                        position: index + 1,
                        total,
                        completed,
                        source,
                    });
                }
            }
        }

        info!(total, "Interview batch complete");
        Ok(completed)
    }

    async fn run_item(
        &self,
        plan: InterviewPlan,
        roster: PersonaRoster,
        progress: &dyn InterviewProgress,
    ) -> Result<CompletedInterview, BatchStepError> {
        let result = self
            .interview
            .execute_with_progress(RunInterviewInput::new(plan, roster), progress)
            .await?;
        let artifact = self.sink.persist(&result)?;
        Ok(CompletedInterview { result, artifact })
    }
}
