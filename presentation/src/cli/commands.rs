//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for interview results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Executive summary per interview
    Summary,
    /// Executive summary plus the full transcript
    Full,
    /// JSON output
    Json,
}

/// CLI arguments for persona-panel
#[derive(Parser, Debug)]
#[command(name = "persona-panel")]
#[command(version, about = "Panel interviews with simulated user personas")]
#[command(long_about = r#"
persona-panel runs simulated panel interviews about product ideas.

A facilitator poses questions to a roster of personas; every persona
answers in turn, seeing the peer answers already given to the same
question. After each interview two analyses are extracted: a per-persona
sentiment breakdown and a go/no-go market summary. One markdown artifact
is written per interview.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./panel.toml        Project-level config
3. ~/.config/persona-panel/config.toml   Global config

The generation backend is configured through OPENAI_API_KEY, and
optionally OPENAI_BASE_URL and OPENAI_MODEL.

Example:
  persona-panel --personas personas.csv --interview interview.json
  persona-panel -i features.json --max-followups 1 --output json
"#)]
pub struct Cli {
    /// Path to the persona roster CSV
    #[arg(short, long, value_name = "PATH", default_value = "personas.csv")]
    pub personas: PathBuf,

    /// Path to the interview configuration JSON
    #[arg(short, long, value_name = "PATH", default_value = "interview.json")]
    pub interview: PathBuf,

    /// Directory for interview artifacts (default: ./interview-artifacts)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Follow-up budget per interview, overriding the interview config
    #[arg(long, value_name = "N")]
    pub max_followups: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress live progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
