//! CLI entrypoint for persona-panel
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use panel_application::{RunBatchInput, RunBatchUseCase};
use panel_infrastructure::{
    CsvPersonaSource, DEFAULT_MAX_FOLLOWUPS, InterviewPlanLoader, MarkdownArtifactWriter,
    OpenAiConfig, OpenAiGateway,
};
use panel_presentation::{Cli, ConfigLoader, ConsoleFormatter, ConsoleReporter, OutputFormat};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    if !config.output.color {
        panel_presentation::output::set_color_enabled(false);
    }

    info!("Starting persona-panel");

    // === Inputs ===
    let roster = CsvPersonaSource::load(&cli.personas)
        .with_context(|| format!("Failed to load personas from {}", cli.personas.display()))?;

    let default_max_followups = config
        .interview
        .max_followups
        .unwrap_or(DEFAULT_MAX_FOLLOWUPS);
    let mut plans = InterviewPlanLoader::load(&cli.interview, default_max_followups)
        .with_context(|| {
            format!(
                "Failed to load interview config from {}",
                cli.interview.display()
            )
        })?;

    // CLI flag overrides every plan's budget
    if let Some(max_followups) = cli.max_followups {
        plans = plans
            .into_iter()
            .map(|plan| plan.with_max_followups(max_followups))
            .collect();
    }

    // === Dependency Injection ===
    let mut backend =
        OpenAiConfig::from_env().context("Generation backend is not configured")?;
    if let Some(model) = &config.models.persona {
        backend = backend.with_persona_model(model);
    }
    if let Some(model) = &config.models.facilitator {
        backend = backend.with_facilitator_model(model);
    }
    if let Some(model) = &config.models.analyst {
        backend = backend.with_analyst_model(model);
    }
    let gateway =
        Arc::new(OpenAiGateway::new(backend).context("Failed to build generation gateway")?);

    let output_dir = cli
        .output_dir
        .clone()
        .or_else(|| config.output.dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("interview-artifacts"));
    let sink = Arc::new(MarkdownArtifactWriter::new(output_dir));

    let use_case = RunBatchUseCase::new(gateway, sink);
    let input = RunBatchInput::new(plans, roster.clone());

    // === Execution ===
    let outcome = if cli.quiet {
        use_case.execute(input).await
    } else {
        let reporter = ConsoleReporter::new(&roster);
        use_case.execute_with_progress(input, &reporter).await
    };

    match outcome {
        Ok(completed) => {
            match cli.output {
                OutputFormat::Json => {
                    println!("{}", ConsoleFormatter::format_json(&completed));
                }
                OutputFormat::Summary => {
                    for item in &completed {
                        println!("{}", ConsoleFormatter::executive_summary(&item.result));
                        println!("Transcript saved to: {}\n", item.artifact.display());
                    }
                    if completed.len() > 1 {
                        println!("{}", ConsoleFormatter::batch_summary(&completed));
                    }
                }
                OutputFormat::Full => {
                    for item in &completed {
                        println!("{}", ConsoleFormatter::full(&item.result));
                        println!("Transcript saved to: {}\n", item.artifact.display());
                    }
                    if completed.len() > 1 {
                        println!("{}", ConsoleFormatter::batch_summary(&completed));
                    }
                }
            }
            Ok(())
        }
        Err(err) => {
            // Interviews completed before the failure stay retrievable
            if !err.completed.is_empty() && !cli.quiet {
                println!("{}", ConsoleFormatter::batch_summary(&err.completed));
            }
            Err(err.into())
        }
    }
}
