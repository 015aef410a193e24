//! Interview configuration loader
//!
//! Reads the JSON interview configuration in either of its two formats
//! and normalizes both to a list of [`InterviewPlan`]s:
//!
//! ```json
//! // Single interview
//! {
//!   "topic": "...",
//!   "core_questions": ["Q1", "Q2"],
//!   "max_followups": 3
//! }
//!
//! // Batch
//! {
//!   "features": [
//!     {"topic": "...", "core_questions": ["Q1"]},
//!     {"topic": "...", "core_questions": ["Q1", "Q2"]}
//!   ],
//!   "max_followups": 3
//! }
//! ```

use crate::config::ConfigError;
use panel_domain::{InterviewPlan, Question};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Follow-up budget applied when the config file does not set one
pub const DEFAULT_MAX_FOLLOWUPS: u32 = 2;

#[derive(Debug, Deserialize)]
struct RawFeature {
    topic: String,
    core_questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawInterviewFile {
    topic: Option<String>,
    core_questions: Option<Vec<String>>,
    features: Option<Vec<RawFeature>>,
    max_followups: Option<u32>,
}

/// Loads interview plans from the JSON configuration file
pub struct InterviewPlanLoader;

impl InterviewPlanLoader {
    /// Load plans from a file, applying `default_max_followups` when the
    /// file does not set a budget of its own
    pub fn load(
        path: impl AsRef<Path>,
        default_max_followups: u32,
    ) -> Result<Vec<InterviewPlan>, ConfigError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|source| ConfigError::io(path, source))?;
        let plans = Self::parse(&content, default_max_followups)?;
        info!(
            path = %path.display(),
            interviews = plans.len(),
            "Loaded interview configuration"
        );
        Ok(plans)
    }

    /// Parse the configuration from a JSON string
    pub fn parse(
        json: &str,
        default_max_followups: u32,
    ) -> Result<Vec<InterviewPlan>, ConfigError> {
        let raw: RawInterviewFile = serde_json::from_str(json)?;
        let max_followups = raw.max_followups.unwrap_or(default_max_followups);

        // Batch format takes precedence when present
        if let Some(features) = raw.features {
            if features.is_empty() {
                return Err(ConfigError::EmptyBatch);
            }
            return features
                .into_iter()
                .map(|feature| Self::plan(feature.topic, feature.core_questions, max_followups))
                .collect();
        }

        let topic = raw.topic.ok_or(ConfigError::MissingField("topic"))?;
        let core_questions = raw
            .core_questions
            .ok_or(ConfigError::MissingField("core_questions"))?;
        Ok(vec![Self::plan(topic, core_questions, max_followups)?])
    }

    fn plan(
        topic: String,
        core_questions: Vec<String>,
        max_followups: u32,
    ) -> Result<InterviewPlan, ConfigError> {
        let questions = core_questions
            .into_iter()
            .map(Question::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(InterviewPlan::new(topic, questions, max_followups)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_format() {
        let json = r#"{
            "topic": "A smart water bottle",
            "core_questions": ["What is your initial reaction?", "Would you pay for it?"],
            "max_followups": 3
        }"#;

        let plans = InterviewPlanLoader::parse(json, DEFAULT_MAX_FOLLOWUPS).unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].topic(), "A smart water bottle");
        assert_eq!(plans[0].core_questions().len(), 2);
        assert_eq!(plans[0].max_followups(), 3);
    }

    #[test]
    fn test_parse_single_format_default_budget() {
        let json = r#"{"topic": "An idea", "core_questions": ["Q1"]}"#;
        let plans = InterviewPlanLoader::parse(json, DEFAULT_MAX_FOLLOWUPS).unwrap();
        assert_eq!(plans[0].max_followups(), 2);
    }

    #[test]
    fn test_parse_batch_format_shares_budget() {
        let json = r#"{
            "features": [
                {"topic": "Feature one", "core_questions": ["Q1"]},
                {"topic": "Feature two", "core_questions": ["Q1", "Q2"]}
            ],
            "max_followups": 1
        }"#;

        let plans = InterviewPlanLoader::parse(json, DEFAULT_MAX_FOLLOWUPS).unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].topic(), "Feature one");
        assert_eq!(plans[1].core_questions().len(), 2);
        assert!(plans.iter().all(|p| p.max_followups() == 1));
    }

    #[test]
    fn test_parse_missing_topic() {
        let result = InterviewPlanLoader::parse(r#"{"core_questions": ["Q1"]}"#, 2);
        assert!(matches!(result, Err(ConfigError::MissingField("topic"))));
    }

    #[test]
    fn test_parse_missing_core_questions() {
        let result = InterviewPlanLoader::parse(r#"{"topic": "An idea"}"#, 2);
        assert!(matches!(
            result,
            Err(ConfigError::MissingField("core_questions"))
        ));
    }

    #[test]
    fn test_parse_empty_batch_rejected() {
        let result = InterviewPlanLoader::parse(r#"{"features": []}"#, 2);
        assert!(matches!(result, Err(ConfigError::EmptyBatch)));
    }

    #[test]
    fn test_parse_empty_question_rejected() {
        let result =
            InterviewPlanLoader::parse(r#"{"topic": "An idea", "core_questions": [""]}"#, 2);
        assert!(matches!(result, Err(ConfigError::Domain(_))));
    }

    #[test]
    fn test_parse_not_an_object() {
        let result = InterviewPlanLoader::parse("[1, 2, 3]", 2);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }
}
