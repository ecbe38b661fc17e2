//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording call events
//! (turns, elicitation answers, likelihood extractions, aborts) to a
//! structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the full
//! call transcript in a machine-readable format (JSONL).

use canvass_domain::{AbortStage, Party, RunResult, VoteLikelihood, VoterProfile};
use serde_json::{Value, json};

/// A structured conversation event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. Timestamps are added by the writer.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "turn", "run_completed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn run_started(run: usize, profile: &VoterProfile) -> Self {
        Self::new("run_started", json!({ "run": run, "voter": profile }))
    }

    pub fn turn(run: usize, party: Party, turn: usize, text: &str) -> Self {
        Self::new(
            "turn",
            json!({ "run": run, "party": party, "turn": turn, "text": text }),
        )
    }

    /// The mark's raw reply to a likelihood prompt; never part of the exchange
    pub fn elicitation_answer(run: usize, stage: &str, text: &str) -> Self {
        Self::new(
            "elicitation_answer",
            json!({ "run": run, "party": Party::Mark, "stage": stage, "text": text }),
        )
    }

    pub fn likelihood_extracted(
        run: usize,
        stage: &str,
        likelihood: &VoteLikelihood,
        via_summary: bool,
    ) -> Self {
        Self::new(
            "likelihood_extracted",
            json!({
                "run": run,
                "stage": stage,
                "target": likelihood.target,
                "turnout": likelihood.turnout,
                "via_summary": via_summary,
            }),
        )
    }

    pub fn run_aborted(run: usize, party: Party, stage: AbortStage) -> Self {
        Self::new(
            "run_aborted",
            json!({ "run": run, "party": party, "stage": stage.to_string() }),
        )
    }

    pub fn run_completed(run: usize, result: &RunResult) -> Self {
        Self::new("run_completed", json!({ "run": run, "result": result }))
    }
}

/// Port for logging conversation events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL line).
/// The `log` method is synchronous and non-fallible; logging failures never
/// interrupt a run.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
