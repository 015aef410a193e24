//! Prompt templates for every participant in the interview flow
//!
//! All composers are deterministic pure functions of their inputs. Each
//! participant sees only the slice of the transcript it is entitled to:
//! the facilitator a bounded window of recent turns, a persona only the
//! peer answers to the question currently on the floor.

use crate::core::question::Question;
use crate::interview::session::InterviewSession;
use crate::persona::entities::Persona;
use crate::persona::roster::PersonaRoster;
use crate::transcript::record::TurnRecord;
use crate::transcript::store::Transcript;
use std::fmt::Write;

/// Cap on transcript records included in the facilitator view
pub const RECENT_TURN_WINDOW: usize = 20;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the facilitator participant
    pub fn facilitator_system() -> &'static str {
        r#"You are the facilitator of a panel interview with simulated user personas.
Each turn you either pose the next question or end the interview.
Ask the remaining core questions in order first, then use your follow-up
budget to dig deeper into something you just heard.
Respond with exactly one JSON object:
{"next_question": "<string>", "should_end": true|false}"#
    }

    /// Facilitator view: topic, open core questions, follow-up budget,
    /// and a bounded window of the most recent turns.
    pub fn facilitator_view(session: &InterviewSession) -> String {
        let mut prompt = format!(
            "You are facilitating an interview about the following idea:\n{}\n\n",
            session.topic()
        );

        let unasked = session.unasked_core_questions();
        if unasked.is_empty() {
            prompt.push_str("All core questions have been asked.\n");
        } else {
            prompt.push_str("Core questions not yet asked:\n");
            for question in unasked {
                let _ = writeln!(prompt, "- {}", question);
            }
        }
        let _ = writeln!(
            prompt,
            "Follow-ups used: {} of {}",
            session.followups_used(),
            session.plan().max_followups()
        );

        let recent = session.transcript().recent(RECENT_TURN_WINDOW);
        if !recent.is_empty() {
            prompt.push_str("\nRecent conversation:\n");
            prompt.push_str(&Self::render_records(recent));
        }

        prompt.push_str("\nDecide on the next question to ask, or whether the interview should end.");
        prompt
    }

    /// System prompt for a persona participant, embedding the panel
    /// context so the model knows who else is on the panel.
    pub fn persona_system(persona: &Persona, panel_context: &str) -> String {
        format!(
            r#"You are {name}.
Persona details: {description}

You are taking part in a panel interview together with these other people:
{panel_context}

For every question you receive:
1. Restate it the way you understand it (one short sentence).
2. Give your answer.
3. If another panelist's shown response is relevant, mention them by name and react briefly.
4. Explain why you think that, with a snippet of personal context.

Rules:
- Never reference other people unless their responses are shown to you.
- If no other responses are shown, give only your own perspective.
- Keep your total response under 120 words."#,
            name = persona.name(),
            description = persona.description(),
            panel_context = panel_context,
        )
    }

    /// Bulleted list of the other panel members for one persona
    pub fn panel_context(roster: &PersonaRoster, persona_name: &str) -> String {
        let others: Vec<String> = roster
            .iter()
            .filter(|p| p.name() != persona_name)
            .map(|p| format!("- {}: {}", p.name(), p.description()))
            .collect();

        if others.is_empty() {
            "- (none)".to_string()
        } else {
            others.join("\n")
        }
    }

    /// Persona view: identity, topic, the current question, and only the
    /// peer answers to that question already on record.
    pub fn persona_view(
        persona: &Persona,
        current_question: &Question,
        transcript: &Transcript,
        topic: &str,
    ) -> String {
        let mut prompt = format!(
            "You are {}.\nPersona details: {}\n\nInterview topic: {}\n\nCurrent question: {}\n\n",
            persona.name(),
            persona.description(),
            topic,
            current_question,
        );

        let peers = transcript.peer_answers(current_question.as_str(), persona.name());
        if peers.is_empty() {
            prompt.push_str("You are the first to answer this question. Please give your perspective.\n");
        } else {
            prompt.push_str("Other participants have already responded to this question:\n\n");
            for (name, answer) in peers {
                let _ = writeln!(prompt, "{}: {}\n", name, answer);
            }
            prompt.push_str(
                "Please give your answer; feel free to react to what others said after giving your own perspective.\n",
            );
        }
        prompt
    }

    /// System prompt for the sentiment extraction request
    pub fn sentiment_system() -> &'static str {
        r#"You are a sentiment analysis expert reviewing a panel interview.
Classify each participant as POSITIVE (enthusiastic, supportive),
NEUTRAL (balanced, weighing pros and cons) or NEGATIVE (concerned,
hesitant, skeptical).
Respond with exactly one JSON object:
{"personas": [{"name": "<string>", "sentiment": "POSITIVE|NEUTRAL|NEGATIVE",
"key_points": ["2-3 bullet strings"], "summary": "<one sentence>"}]}"#
    }

    /// Sentiment view: every answer grouped per persona in roster order,
    /// with the question it responded to as context.
    pub fn sentiment_view(transcript: &Transcript, roster: &PersonaRoster) -> String {
        let mut prompt =
            String::from("Analyze the sentiment and key points of each panel participant.\n\n");

        let triples = transcript.answers_with_questions();
        for persona in roster.iter() {
            let _ = writeln!(prompt, "## {}", persona.name());
            let mut any = false;
            for (name, question, answer) in &triples {
                if *name == persona.name() {
                    let _ = writeln!(prompt, "Question: {}\nResponse: {}\n", question, answer);
                    any = true;
                }
            }
            if !any {
                prompt.push_str("(no responses recorded)\n\n");
            }
        }

        let _ = writeln!(
            prompt,
            "Include exactly one entry per participant: {}.",
            roster.names().join(", ")
        );
        prompt
    }

    /// System prompt for the summary report request
    pub fn summary_system() -> &'static str {
        r#"You are a senior product strategist. Given the full transcript of a
multi-persona interview:
1. Capture the overall market perspective in at most 100 words.
2. Decide GO or NO_GO for the idea.
3. List 3-6 bullet-point reasons referencing the personas' remarks.
Respond with exactly one JSON object:
{"market_perspective": "<string>", "decision": "GO|NO_GO", "rationale": ["<string>", ...]}"#
    }

    /// Summary view: the full chronological transcript as one document
    pub fn summary_view(topic: &str, transcript: &Transcript) -> String {
        let mut prompt = format!("Interview topic: {}\n\nInterview transcript:\n\n", topic);

        if transcript.is_empty() {
            prompt.push_str("(the interview ended before any questions were asked)\n");
        } else {
            prompt.push_str(&Self::render_records(transcript.records()));
        }
        prompt
    }

    fn render_records(records: &[TurnRecord]) -> String {
        let mut out = String::new();
        for record in records {
            match record {
                TurnRecord::Question { text } => {
                    let _ = writeln!(out, "Facilitator: {}", text);
                }
                TurnRecord::Answer { persona, text } => {
                    let _ = writeln!(out, "{}: {}", persona, text);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::session::InterviewPlan;

    fn persona(name: &str) -> Persona {
        Persona::new(name, format!("{} description", name)).unwrap()
    }

    fn roster(names: &[&str]) -> PersonaRoster {
        PersonaRoster::new(names.iter().map(|n| persona(n)).collect()).unwrap()
    }

    fn question(text: &str) -> Question {
        Question::new(text).unwrap()
    }

    fn session_with(core: &[&str], max_followups: u32) -> InterviewSession {
        InterviewSession::new(
            InterviewPlan::new(
                "A smart water bottle",
                core.iter().map(|q| question(q)).collect(),
                max_followups,
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_facilitator_view_lists_unasked_core_questions() {
        let mut session = session_with(&["Q1", "Q2"], 2);
        session.record_question(&question("Q1"));

        let view = PromptTemplate::facilitator_view(&session);
        assert!(view.contains("A smart water bottle"));
        assert!(view.contains("- Q2"));
        assert!(!view.contains("- Q1\n"));
        assert!(view.contains("Follow-ups used: 0 of 2"));
    }

    #[test]
    fn test_facilitator_view_window_is_bounded() {
        let mut session = session_with(&["Q1"], 30);
        let alice = persona("Alice");
        for i in 0..15 {
            session.record_question(&question(&format!("question number {}", i)));
            session.record_answer(&alice, format!("answer number {}", i)).unwrap();
        }

        // 30 records total, window keeps the last 20
        let view = PromptTemplate::facilitator_view(&session);
        assert!(!view.contains("answer number 0"));
        assert!(!view.contains("question number 4"));
        assert!(view.contains("question number 5"));
        assert!(view.contains("answer number 14"));
    }

    #[test]
    fn test_persona_view_first_responder() {
        let mut session = session_with(&["Q1"], 0);
        session.record_question(&question("Q1"));

        let roster = roster(&["Alice", "Bob"]);
        let view = PromptTemplate::persona_view(
            roster.get(0).unwrap(),
            &question("Q1"),
            session.transcript(),
            session.topic(),
        );
        assert!(view.contains("first to answer"));
        assert!(view.contains("Current question: Q1"));
    }

    #[test]
    fn test_persona_view_shows_peers_but_not_self_or_other_rounds() {
        let roster = roster(&["Alice", "Bob", "Claire"]);
        let mut session = session_with(&["Q1", "Q2"], 0);

        session.record_question(&question("Q1"));
        session
            .record_answer(roster.get(0).unwrap(), "Alice on Q1")
            .unwrap();
        session
            .record_answer(roster.get(1).unwrap(), "Bob on Q1")
            .unwrap();
        session.record_question(&question("Q2"));
        session
            .record_answer(roster.get(0).unwrap(), "Alice on Q2")
            .unwrap();

        // Bob answering Q2: sees Alice's Q2 answer, nothing from Q1, and
        // not his own earlier answer.
        let view = PromptTemplate::persona_view(
            roster.get(1).unwrap(),
            &question("Q2"),
            session.transcript(),
            session.topic(),
        );
        assert!(view.contains("Alice: Alice on Q2"));
        assert!(!view.contains("Alice on Q1"));
        assert!(!view.contains("Bob on Q1"));
    }

    #[test]
    fn test_panel_context_excludes_self() {
        let roster = roster(&["Alice", "Bob"]);
        let context = PromptTemplate::panel_context(&roster, "Alice");
        assert!(context.contains("Bob"));
        assert!(!context.contains("Alice:"));

        let solo = PersonaRoster::new(vec![persona("Alice")]).unwrap();
        assert_eq!(PromptTemplate::panel_context(&solo, "Alice"), "- (none)");
    }

    #[test]
    fn test_persona_system_embeds_identity_and_rules() {
        let p = persona("Alice");
        let system = PromptTemplate::persona_system(&p, "- Bob: desk worker");
        assert!(system.contains("You are Alice."));
        assert!(system.contains("- Bob: desk worker"));
        assert!(system.contains("under 120 words"));
    }

    #[test]
    fn test_sentiment_view_groups_by_roster_order() {
        let roster = roster(&["Alice", "Bob"]);
        let mut session = session_with(&["Q1"], 0);
        session.record_question(&question("Q1"));
        session
            .record_answer(roster.get(1).unwrap(), "Bob first for once")
            .unwrap();
        session
            .record_answer(roster.get(0).unwrap(), "Alice second")
            .unwrap();

        let view = PromptTemplate::sentiment_view(session.transcript(), &roster);
        let alice_pos = view.find("## Alice").unwrap();
        let bob_pos = view.find("## Bob").unwrap();
        assert!(alice_pos < bob_pos);
        assert!(view.contains("Question: Q1"));
        assert!(view.contains("exactly one entry per participant: Alice, Bob."));
    }

    #[test]
    fn test_sentiment_view_empty_transcript() {
        let roster = roster(&["Alice"]);
        let view = PromptTemplate::sentiment_view(&Transcript::new(), &roster);
        assert!(view.contains("## Alice"));
        assert!(view.contains("(no responses recorded)"));
    }

    #[test]
    fn test_summary_view_renders_full_transcript_in_order() {
        let roster = roster(&["Alice"]);
        let mut session = session_with(&["Q1"], 0);
        session.record_question(&question("Q1"));
        session
            .record_answer(roster.get(0).unwrap(), "my answer")
            .unwrap();

        let view = PromptTemplate::summary_view(session.topic(), session.transcript());
        let q_pos = view.find("Facilitator: Q1").unwrap();
        let a_pos = view.find("Alice: my answer").unwrap();
        assert!(q_pos < a_pos);
    }

    #[test]
    fn test_summary_view_empty_transcript() {
        let view = PromptTemplate::summary_view("topic", &Transcript::new());
        assert!(view.contains("ended before any questions"));
    }
}
