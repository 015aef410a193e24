//! Application layer for persona-panel
//!
//! This crate contains use cases and port definitions. It depends only on
//! the domain layer; adapters for the ports live in the infrastructure
//! and presentation layers.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    artifact::{ArtifactError, ArtifactSink, DiscardArtifacts},
    generation::{GatewayError, GenerationGateway, GenerationRequest, ParticipantRole},
    progress::{InterviewProgress, NoProgress},
};
pub use use_cases::run_batch::{
    BatchError, BatchStepError, CompletedInterview, RunBatchInput, RunBatchUseCase,
};
pub use use_cases::run_interview::{RunInterviewError, RunInterviewInput, RunInterviewUseCase};
