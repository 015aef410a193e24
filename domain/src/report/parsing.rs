//! Structured-output parsing for participant responses.
//!
//! Generation backends return free text; the structured contracts
//! (facilitator directive, report, sentiment analysis) are carried as a
//! JSON object embedded in that text, possibly surrounded by prose or a
//! markdown fence. These functions extract the object, deserialize it,
//! and validate the schema contracts. They are pure domain logic, no I/O.

use crate::interview::machine::FacilitatorDirective;
use crate::persona::roster::PersonaRoster;
use crate::report::entities::{Report, SentimentAnalysis};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised when a participant's output violates its contract
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("no JSON object found in participant output")]
    MissingJson,

    #[error("malformed participant output: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("facilitator directive poses an empty question")]
    EmptyQuestion,

    #[error(
        "sentiment analysis does not cover the roster (missing: {missing:?}, unexpected: {unexpected:?}, duplicated: {duplicated:?})"
    )]
    RosterMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
        duplicated: Vec<String>,
    },
}

/// Slice out the outermost JSON object embedded in a response
fn extract_json(response: &str) -> Result<&str, ParseError> {
    let start = response.find('{').ok_or(ParseError::MissingJson)?;
    let end = response[start..].rfind('}').ok_or(ParseError::MissingJson)?;
    Ok(&response[start..start + end + 1])
}

/// Parse the facilitator's `{next_question, should_end}` decision.
///
/// A directive that continues the interview with a blank question is a
/// contract violation.
pub fn parse_directive(response: &str) -> Result<FacilitatorDirective, ParseError> {
    let directive: FacilitatorDirective = serde_json::from_str(extract_json(response)?)?;

    if !directive.should_end && directive.next_question.trim().is_empty() {
        return Err(ParseError::EmptyQuestion);
    }
    Ok(directive)
}

/// Parse the go/no-go summary report
pub fn parse_report(response: &str) -> Result<Report, ParseError> {
    Ok(serde_json::from_str(extract_json(response)?)?)
}

/// Parse the sentiment analysis and enforce roster coverage.
///
/// The output must contain exactly one entry per roster persona; a
/// missing, unknown, or duplicated persona is a schema violation, not
/// silently tolerated.
pub fn parse_sentiment(
    response: &str,
    roster: &PersonaRoster,
) -> Result<SentimentAnalysis, ParseError> {
    let analysis: SentimentAnalysis = serde_json::from_str(extract_json(response)?)?;

    let mut seen = HashSet::new();
    let mut duplicated = Vec::new();
    let mut unexpected = Vec::new();

    for entry in &analysis.personas {
        if !seen.insert(entry.name.as_str()) {
            duplicated.push(entry.name.clone());
        }
        if !roster.contains(&entry.name) {
            unexpected.push(entry.name.clone());
        }
    }

    let missing: Vec<String> = roster
        .names()
        .into_iter()
        .filter(|name| !seen.contains(name))
        .map(String::from)
        .collect();

    if missing.is_empty() && unexpected.is_empty() && duplicated.is_empty() {
        Ok(analysis)
    } else {
        Err(ParseError::RosterMismatch {
            missing,
            unexpected,
            duplicated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::entities::Persona;
    use crate::report::entities::{Decision, Sentiment};

    fn roster(names: &[&str]) -> PersonaRoster {
        PersonaRoster::new(
            names
                .iter()
                .map(|n| Persona::new(*n, "desc").unwrap())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_parse_directive_plain_json() {
        let d = parse_directive(r#"{"next_question": "Why?", "should_end": false}"#).unwrap();
        assert_eq!(d.next_question, "Why?");
        assert!(!d.should_end);
    }

    #[test]
    fn test_parse_directive_with_surrounding_prose() {
        let response = r#"Here is my decision:
```json
{"next_question": "What concerns do you have?", "should_end": false}
```
"#;
        let d = parse_directive(response).unwrap();
        assert_eq!(d.next_question, "What concerns do you have?");
    }

    #[test]
    fn test_parse_directive_end_allows_blank_question() {
        let d = parse_directive(r#"{"next_question": "", "should_end": true}"#).unwrap();
        assert!(d.should_end);
    }

    #[test]
    fn test_parse_directive_blank_question_rejected() {
        let result = parse_directive(r#"{"next_question": "  ", "should_end": false}"#);
        assert!(matches!(result, Err(ParseError::EmptyQuestion)));
    }

    #[test]
    fn test_parse_directive_no_json() {
        assert!(matches!(
            parse_directive("I think we should continue"),
            Err(ParseError::MissingJson)
        ));
    }

    #[test]
    fn test_parse_directive_missing_field() {
        assert!(matches!(
            parse_directive(r#"{"next_question": "Why?"}"#),
            Err(ParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_report() {
        let response = r#"{
            "market_perspective": "Strong interest from active users.",
            "decision": "GO",
            "rationale": ["Alice loved it", "Bob would pay", "Claire is unsure"]
        }"#;
        let report = parse_report(response).unwrap();
        assert_eq!(report.decision, Decision::Go);
        assert_eq!(report.rationale.len(), 3);
    }

    #[test]
    fn test_parse_report_no_go_alias() {
        let response = r#"{"market_perspective": "weak", "decision": "NO-GO", "rationale": ["too niche"]}"#;
        let report = parse_report(response).unwrap();
        assert_eq!(report.decision, Decision::NoGo);
    }

    #[test]
    fn test_parse_sentiment_full_coverage() {
        let response = r#"{"personas": [
            {"name": "Alice", "sentiment": "POSITIVE", "key_points": ["likes it"], "summary": "keen"},
            {"name": "Bob", "sentiment": "NEGATIVE", "key_points": ["too pricey"], "summary": "skeptical"}
        ]}"#;
        let analysis = parse_sentiment(response, &roster(&["Alice", "Bob"])).unwrap();
        assert_eq!(analysis.for_persona("Bob").unwrap().sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_parse_sentiment_missing_persona() {
        let response = r#"{"personas": [
            {"name": "Alice", "sentiment": "NEUTRAL", "key_points": [], "summary": "meh"}
        ]}"#;
        let result = parse_sentiment(response, &roster(&["Alice", "Bob"]));
        assert!(
            matches!(result, Err(ParseError::RosterMismatch { missing, .. }) if missing == ["Bob"])
        );
    }

    #[test]
    fn test_parse_sentiment_unknown_persona() {
        let response = r#"{"personas": [
            {"name": "Alice", "sentiment": "NEUTRAL", "key_points": [], "summary": "meh"},
            {"name": "Mallory", "sentiment": "POSITIVE", "key_points": [], "summary": "who?"}
        ]}"#;
        let result = parse_sentiment(response, &roster(&["Alice"]));
        assert!(
            matches!(result, Err(ParseError::RosterMismatch { unexpected, .. }) if unexpected == ["Mallory"])
        );
    }

    #[test]
    fn test_parse_sentiment_duplicated_persona() {
        let response = r#"{"personas": [
            {"name": "Alice", "sentiment": "NEUTRAL", "key_points": [], "summary": "meh"},
            {"name": "Alice", "sentiment": "POSITIVE", "key_points": [], "summary": "again"}
        ]}"#;
        let result = parse_sentiment(response, &roster(&["Alice"]));
        assert!(
            matches!(result, Err(ParseError::RosterMismatch { duplicated, .. }) if duplicated == ["Alice"])
        );
    }
}
