//! Run entities

use crate::conversation::Party;
use crate::likelihood::{PriorSource, VoteLikelihood};
use crate::profile::Affiliation;
use crate::signals::ViolationCounts;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Scalar outcome of one completed simulated call (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub prior: VoteLikelihood,
    pub prior_source: PriorSource,
    #[serde(rename = "final")]
    pub final_likelihood: VoteLikelihood,
    /// Utterances exchanged on the call, including the mark's greeting
    pub num_replies: usize,
    /// Completed canvasser/mark exchange pairs
    pub turns_completed: usize,
    pub duration: Duration,
    pub canvasser_violations: ViolationCounts,
    pub mark_violations: ViolationCounts,
    pub mark_withdrew: bool,
    pub voter_affiliation: Affiliation,
}

impl RunResult {
    /// Change in likelihoods over the call
    pub fn shift(&self) -> VoteLikelihood {
        self.final_likelihood.shift_from(&self.prior)
    }
}

/// Point in the run at which generation stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbortStage {
    PriorElicitation,
    /// Exchange turn index (0-based)
    Exchange(usize),
    FinalElicitation,
}

impl std::fmt::Display for AbortStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbortStage::PriorElicitation => f.write_str("prior elicitation"),
            AbortStage::Exchange(turn) => write!(f, "exchange turn {}", turn + 1),
            AbortStage::FinalElicitation => f.write_str("final elicitation"),
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    Completed(RunResult),
    /// A party returned no output; partial results are discarded
    Aborted { party: Party, stage: AbortStage },
}

impl RunOutcome {
    pub fn result(&self) -> Option<&RunResult> {
        match self {
            RunOutcome::Completed(result) => Some(result),
            RunOutcome::Aborted { .. } => None,
        }
    }
}

/// Status of one run inside an experiment
///
/// Extends [`RunOutcome`] with runs that failed outright (transport error
/// or an answer that could not be extracted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunStatus {
    Completed(RunResult),
    Aborted { party: Party, stage: AbortStage },
    Failed { error: String },
}

impl RunStatus {
    pub fn failed(error: impl std::fmt::Display) -> Self {
        RunStatus::Failed {
            error: error.to_string(),
        }
    }

    pub fn result(&self) -> Option<&RunResult> {
        match self {
            RunStatus::Completed(result) => Some(result),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RunStatus::Completed(_) => "completed",
            RunStatus::Aborted { .. } => "aborted",
            RunStatus::Failed { .. } => "failed",
        }
    }
}

impl From<RunOutcome> for RunStatus {
    fn from(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::Completed(result) => RunStatus::Completed(result),
            RunOutcome::Aborted { party, stage } => RunStatus::Aborted { party, stage },
        }
    }
}
