//! Markdown artifact writer
//!
//! Renders one markdown document per completed interview (decision,
//! market perspective, rationale, per-persona sentiment, full ordered
//! transcript) and writes it under the configured output directory as
//! `<topic-slug>-<YYYYMMDD>.md`.

use panel_application::{ArtifactError, ArtifactSink};
use panel_domain::{InterviewResult, TurnRecord};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes interview artifacts as markdown files
pub struct MarkdownArtifactWriter {
    output_dir: PathBuf,
}

impl MarkdownArtifactWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render the full interview document
    pub fn render(result: &InterviewResult) -> String {
        let mut doc = format!("# Interview Transcript: {}\n\n", result.topic);
        let _ = writeln!(
            doc,
            "**Date:** {}\n",
            chrono::Local::now().format("%Y-%m-%d")
        );
        let _ = writeln!(doc, "**Decision: {}**\n", result.report.decision);

        doc.push_str("## Market Perspective\n\n");
        let _ = writeln!(doc, "{}\n", result.report.market_perspective);

        doc.push_str("## Key Rationale\n\n");
        for point in &result.report.rationale {
            let _ = writeln!(doc, "- {}", point);
        }
        doc.push('\n');

        doc.push_str("## Persona Sentiments\n\n");
        for entry in result.sentiment.iter() {
            let _ = writeln!(doc, "### {} - {}\n", entry.name, entry.sentiment);
            let _ = writeln!(doc, "**Summary:** {}\n", entry.summary);
            doc.push_str("**Key Points:**\n");
            for point in &entry.key_points {
                let _ = writeln!(doc, "- {}", point);
            }
            doc.push('\n');
        }

        doc.push_str("## Full Transcript\n\n");
        for record in result.transcript.records() {
            match record {
                TurnRecord::Question { text } => {
                    let _ = writeln!(doc, "**Facilitator:** {}\n", text);
                }
                TurnRecord::Answer { persona, text } => {
                    let _ = writeln!(doc, "**{}:** {}\n", persona, text);
                }
            }
        }

        doc
    }

    /// Topic reduced to a file-name-safe slug
    fn sanitize_topic(topic: &str) -> String {
        let cleaned: String = topic
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-')
            .collect();
        cleaned
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }

    fn file_name(topic: &str) -> String {
        format!(
            "{}-{}.md",
            Self::sanitize_topic(topic),
            chrono::Local::now().format("%Y%m%d")
        )
    }
}

impl ArtifactSink for MarkdownArtifactWriter {
    fn persist(&self, result: &InterviewResult) -> Result<PathBuf, ArtifactError> {
        fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join(Self::file_name(&result.topic));
        fs::write(&path, Self::render(result))?;

        info!(path = %path.display(), "Interview artifact written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_domain::{
        Decision, Persona, PersonaSentiment, Question, Report, Sentiment, SentimentAnalysis,
        Transcript,
    };

    fn sample_result() -> InterviewResult {
        let mut transcript = Transcript::new();
        transcript.push_question(Question::new("What do you think?").unwrap());
        transcript
            .push_answer(&Persona::new("Alice", "runner").unwrap(), "I like it")
            .unwrap();

        InterviewResult::new(
            "A smart water bottle",
            vec!["Alice".to_string()],
            transcript,
            Report {
                market_perspective: "Niche but real demand.".to_string(),
                decision: Decision::Go,
                rationale: vec!["Alice was enthusiastic".to_string()],
            },
            SentimentAnalysis {
                personas: vec![PersonaSentiment {
                    name: "Alice".to_string(),
                    sentiment: Sentiment::Positive,
                    key_points: vec!["likes tracking".to_string()],
                    summary: "Keen early adopter".to_string(),
                }],
            },
        )
    }

    #[test]
    fn test_render_contains_sections_in_order() {
        let doc = MarkdownArtifactWriter::render(&sample_result());

        let decision = doc.find("**Decision: GO**").unwrap();
        let perspective = doc.find("## Market Perspective").unwrap();
        let rationale = doc.find("## Key Rationale").unwrap();
        let sentiments = doc.find("## Persona Sentiments").unwrap();
        let transcript = doc.find("## Full Transcript").unwrap();

        assert!(decision < perspective);
        assert!(perspective < rationale);
        assert!(rationale < sentiments);
        assert!(sentiments < transcript);

        assert!(doc.contains("### Alice - POSITIVE"));
        assert!(doc.contains("**Facilitator:** What do you think?"));
        assert!(doc.contains("**Alice:** I like it"));
    }

    #[test]
    fn test_sanitize_topic() {
        assert_eq!(
            MarkdownArtifactWriter::sanitize_topic("A smart water bottle!"),
            "A-smart-water-bottle"
        );
        assert_eq!(
            MarkdownArtifactWriter::sanitize_topic("  spaces   everywhere  "),
            "spaces-everywhere"
        );
    }

    #[test]
    fn test_persist_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = MarkdownArtifactWriter::new(dir.path().join("artifacts"));

        let path = writer.persist(&sample_result()).unwrap();
        assert!(path.exists());

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Interview Transcript: A smart water bottle"));
        assert!(
            path.file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("A-smart-water-bottle-")
        );
    }
}
