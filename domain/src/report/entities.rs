//! Report and sentiment value objects
//!
//! Produced exactly once per interview by the analysis stage and
//! immutable thereafter.

use serde::{Deserialize, Serialize};

/// Go/no-go decision for the idea under discussion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    #[serde(rename = "GO")]
    Go,
    #[serde(rename = "NO_GO", alias = "NO-GO")]
    NoGo,
}

impl Decision {
    pub fn is_go(&self) -> bool {
        matches!(self, Decision::Go)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Go => write!(f, "GO"),
            Decision::NoGo => write!(f, "NO-GO"),
        }
    }
}

/// Structured market summary extracted from the full transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Short paragraph capturing the overall market perspective
    pub market_perspective: String,
    /// The go/no-go call
    pub decision: Decision,
    /// Bullet-point reasons referencing the personas' remarks
    pub rationale: Vec<String>,
}

impl Report {
    /// The leading rationale points, at most `n` of them
    pub fn leading_rationale(&self, n: usize) -> &[String] {
        &self.rationale[..self.rationale.len().min(n)]
    }
}

/// Overall sentiment of one persona across the interview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "POSITIVE"),
            Sentiment::Neutral => write!(f, "NEUTRAL"),
            Sentiment::Negative => write!(f, "NEGATIVE"),
        }
    }
}

/// One persona's sentiment entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaSentiment {
    pub name: String,
    pub sentiment: Sentiment,
    /// Key points the persona made (2-3 expected)
    pub key_points: Vec<String>,
    /// One-sentence summary of their perspective
    pub summary: String,
}

/// Sentiment breakdown covering the whole roster.
///
/// Coverage (one entry per roster persona, no duplicates, no extras) is
/// enforced when the backend output is parsed; see
/// [`crate::report::parsing::parse_sentiment`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub personas: Vec<PersonaSentiment>,
}

impl SentimentAnalysis {
    pub fn for_persona(&self, name: &str) -> Option<&PersonaSentiment> {
        self.personas.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonaSentiment> {
        self.personas.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_serialization() {
        assert_eq!(serde_json::to_string(&Decision::Go).unwrap(), "\"GO\"");
        assert_eq!(serde_json::to_string(&Decision::NoGo).unwrap(), "\"NO_GO\"");

        let d: Decision = serde_json::from_str("\"NO-GO\"").unwrap();
        assert_eq!(d, Decision::NoGo);
    }

    #[test]
    fn test_decision_display() {
        assert_eq!(Decision::Go.to_string(), "GO");
        assert_eq!(Decision::NoGo.to_string(), "NO-GO");
        assert!(Decision::Go.is_go());
    }

    #[test]
    fn test_sentiment_serialization() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            "\"POSITIVE\""
        );
        let s: Sentiment = serde_json::from_str("\"NEGATIVE\"").unwrap();
        assert_eq!(s, Sentiment::Negative);
    }

    #[test]
    fn test_leading_rationale_caps() {
        let report = Report {
            market_perspective: "promising".to_string(),
            decision: Decision::Go,
            rationale: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        };
        assert_eq!(report.leading_rationale(2), &["a", "b"]);
        assert_eq!(report.leading_rationale(5).len(), 3);
    }
}
