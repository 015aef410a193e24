//! Generation gateway port
//!
//! Defines the interface to the text-generation backend. This is the only
//! true external dependency of the interview loop; every participant
//! (facilitator, personas, the two analysts) is invoked through it, one
//! call at a time.

use async_trait::async_trait;
use thiserror::Error;

/// Which participant a generation request speaks for.
///
/// Adapters may route roles to different models; the loop uses the role
/// to attribute failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantRole {
    /// Picks the next question and decides termination
    Facilitator,
    /// A persona answering the current question
    Persona(String),
    /// Post-interview sentiment extraction
    SentimentAnalyst,
    /// Post-interview go/no-go summary
    Summarizer,
}

impl std::fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParticipantRole::Facilitator => write!(f, "facilitator"),
            ParticipantRole::Persona(name) => write!(f, "persona {}", name),
            ParticipantRole::SentimentAnalyst => write!(f, "sentiment analyst"),
            ParticipantRole::Summarizer => write!(f, "summarizer"),
        }
    }
}

/// One generation request: a system prompt plus the composed view
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub role: ParticipantRole,
    pub system_prompt: String,
    pub prompt: String,
}

impl GenerationRequest {
    pub fn new(
        role: ParticipantRole,
        system_prompt: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            role,
            system_prompt: system_prompt.into(),
            prompt: prompt.into(),
        }
    }
}

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Backend returned an empty completion")]
    EmptyCompletion,
}

/// Gateway to the generation backend
///
/// The loop suspends on every call; there is no retry policy here, a
/// failed call aborts the current interview.
#[async_trait]
pub trait GenerationGateway: Send + Sync {
    /// Produce one participant utterance for the given request
    async fn generate(&self, request: GenerationRequest) -> Result<String, GatewayError>;
}
