//! Console progress reporter
//!
//! Renders the interview live as it unfolds: header, question banners,
//! styled persona answers, and a spinner while the analysis extractions
//! run.

use crate::output::console::ConsoleFormatter;
use crate::output::style::PanelStyles;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use panel_application::InterviewProgress;
use panel_domain::{Persona, PersonaRoster, Question};
use std::sync::Mutex;
use std::time::Duration;

/// Prints interview progress to the console
pub struct ConsoleReporter {
    styles: PanelStyles,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new(roster: &PersonaRoster) -> Self {
        Self {
            styles: PanelStyles::assign(roster),
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }
}

impl InterviewProgress for ConsoleReporter {
    fn on_interview_start(&self, topic: &str, roster: &PersonaRoster) {
        println!("{}", ConsoleFormatter::interview_header(topic, roster));
    }

    fn on_question(&self, round: usize, question: &Question) {
        println!("{}", ConsoleFormatter::question_banner(round, question));
    }

    fn on_answer(&self, persona: &Persona, answer: &str) {
        let style = self.styles.for_persona(persona.name());
        println!(
            "{}",
            ConsoleFormatter::answer_panel(&style, persona.name(), answer)
        );
    }

    fn on_interview_end(&self) {
        println!(
            "\n{} That's all, thanks everyone!\n",
            "Facilitator:".yellow().bold()
        );
    }

    fn on_analysis_start(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Generating analysis...");
        pb.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.lock().unwrap() = Some(pb);
    }

    fn on_analysis_complete(&self) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.finish_with_message(format!("{}", "Analysis complete".green()));
        }
    }

    fn on_batch_item_start(&self, position: usize, total: usize, topic: &str) {
        if total > 1 {
            println!(
                "\n{}\n{}",
                "=".repeat(60).dimmed(),
                format!("Interview {}/{}: {}", position, total, topic)
                    .magenta()
                    .bold()
            );
        }
    }
}
