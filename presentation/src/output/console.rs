//! Console output formatter for interview results

use crate::output::style::PersonaStyle;
use colored::Colorize;
use panel_application::CompletedInterview;
use panel_domain::{InterviewResult, PersonaRoster, Question, Sentiment, TurnRecord};
use std::fmt::Write;

/// Formats interview output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Header shown when an interview starts
    pub fn interview_header(topic: &str, roster: &PersonaRoster) -> String {
        let mut out = String::new();
        out.push_str(&Self::header("Panel Interview"));
        let _ = write!(out, "\n{} {}\n\n", "Topic:".cyan().bold(), topic);

        out.push_str(&format!("{}\n", "Participants:".cyan().bold()));
        for persona in roster.iter() {
            let _ = writeln!(out, "  {} - {}", persona.name().bold(), persona.description());
        }
        out
    }

    /// Banner for a posed question
    pub fn question_banner(round: usize, question: &Question) -> String {
        format!(
            "\n{} {}\n",
            format!("[Round {}] Facilitator asks:", round).yellow().bold(),
            question
        )
    }

    /// One persona's answer, styled with its panel color and emoji
    pub fn answer_panel(style: &PersonaStyle, persona_name: &str, answer: &str) -> String {
        format!(
            "{} {}\n{}\n",
            style.emoji,
            persona_name.color(style.color).bold(),
            Self::indent(answer, "  ")
        )
    }

    /// Executive summary: decision, market perspective, rationale,
    /// per-persona sentiment
    pub fn executive_summary(result: &InterviewResult) -> String {
        let mut out = String::new();

        out.push_str(&Self::header("Executive Summary"));
        let _ = write!(out, "\n{} {}\n", "Topic:".cyan().bold(), result.topic);

        let decision = if result.report.decision.is_go() {
            result.report.decision.to_string().green().bold()
        } else {
            result.report.decision.to_string().red().bold()
        };
        let _ = write!(out, "{} {}\n\n", "Decision:".cyan().bold(), decision);

        out.push_str(&Self::section_header("Market Perspective"));
        let _ = write!(out, "{}\n", result.report.market_perspective);

        out.push_str(&Self::section_header("Key Rationale"));
        for (i, point) in result.report.rationale.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, point);
        }

        out.push_str(&Self::section_header("Persona Sentiments"));
        for entry in result.sentiment.iter() {
            let sentiment = Self::sentiment_colored(entry.sentiment);
            let _ = writeln!(out, "\n{} [{}]", entry.name.bold(), sentiment);
            let _ = writeln!(out, "  {}", entry.summary);
            for point in &entry.key_points {
                let _ = writeln!(out, "  * {}", point);
            }
        }

        out.push_str(&Self::footer());
        out
    }

    /// Executive summary plus the full transcript
    pub fn full(result: &InterviewResult) -> String {
        let mut out = Self::executive_summary(result);

        out.push_str(&Self::section_header("Full Transcript"));
        for record in result.transcript.records() {
            match record {
                TurnRecord::Question { text } => {
                    let _ = writeln!(out, "\n{} {}", "Facilitator:".yellow().bold(), text);
                }
                TurnRecord::Answer { persona, text } => {
                    let _ = writeln!(out, "{} {}", format!("{}:", persona).bold(), text);
                }
            }
        }
        out
    }

    /// Aggregated batch results: one row per interview
    pub fn batch_summary(completed: &[CompletedInterview]) -> String {
        let mut out = String::new();
        out.push_str(&Self::header("Batch Results"));
        out.push('\n');

        for item in completed {
            let decision = if item.result.report.decision.is_go() {
                item.result.report.decision.to_string().green().bold()
            } else {
                item.result.report.decision.to_string().red().bold()
            };
            let _ = writeln!(out, "{} [{}]", item.result.topic.bold(), decision);
            for point in item.result.report.leading_rationale(2) {
                let _ = writeln!(out, "  * {}", point);
            }
            let artifact = item
                .artifact
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_else(|| item.artifact.display().to_string());
            let _ = writeln!(out, "  {} {}\n", "Artifact:".dimmed(), artifact);
        }
        out
    }

    /// JSON rendering of the completed interviews
    pub fn format_json(completed: &[CompletedInterview]) -> String {
        let items: Vec<serde_json::Value> = completed
            .iter()
            .map(|item| {
                serde_json::json!({
                    "artifact": item.artifact,
                    "interview": item.result,
                })
            })
            .collect();
        serde_json::to_string_pretty(&items).unwrap_or_else(|_| "[]".to_string())
    }

    fn sentiment_colored(sentiment: Sentiment) -> colored::ColoredString {
        match sentiment {
            Sentiment::Positive => sentiment.to_string().green().bold(),
            Sentiment::Neutral => sentiment.to_string().yellow().bold(),
            Sentiment::Negative => sentiment.to_string().red().bold(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
