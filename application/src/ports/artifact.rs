//! Artifact sink port
//!
//! One rendered document is persisted per completed interview. The sink
//! decides format and location and returns a reference the batch summary
//! can point at.

use panel_domain::InterviewResult;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while persisting an interview artifact
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to persist interview artifact: {0}")]
    Io(#[from] std::io::Error),
}

/// Sink for completed interview documents
pub trait ArtifactSink: Send + Sync {
    /// Persist one interview's document, returning a reference to it
    fn persist(&self, result: &InterviewResult) -> Result<PathBuf, ArtifactError>;
}

/// Sink that keeps nothing; for tests and dry runs.
///
/// Returns an empty path as the artifact reference.
pub struct DiscardArtifacts;

impl ArtifactSink for DiscardArtifacts {
    fn persist(&self, _result: &InterviewResult) -> Result<PathBuf, ArtifactError> {
        Ok(PathBuf::new())
    }
}
