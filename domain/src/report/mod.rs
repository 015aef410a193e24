//! Analysis outputs: go/no-go report and per-persona sentiment

pub mod entities;
pub mod parsing;

pub use entities::{Decision, PersonaSentiment, Report, Sentiment, SentimentAnalysis};
pub use parsing::{ParseError, parse_directive, parse_report, parse_sentiment};
