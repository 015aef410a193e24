//! Configuration loading errors and the interview plan loader

pub mod interview;

pub use interview::{DEFAULT_MAX_FOLLOWUPS, InterviewPlanLoader};

use panel_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading persona or interview configuration.
///
/// All of these are fatal and surface before any interview starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed persona file: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed interview config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Interview config missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Interview config contains no interviews")]
    EmptyBatch,

    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }
}
