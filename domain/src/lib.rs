//! Domain layer for canvass-sim
//!
//! This crate contains the core logic, entities, and value objects of the
//! canvassing simulation. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Canvassing call
//!
//! Two model-driven personas talk on a simulated phone call:
//!
//! - **Canvasser**: tries to shift the voter's intention
//! - **Mark**: the voter, built from a randomized [`VoterProfile`]
//!
//! Each party sees only its own [`ConversationLog`]; utterances cross over
//! through an explicit copy-and-relabel handoff.
//!
//! ## Vote likelihood
//!
//! Before and after the call the mark reports two percentages in the
//! `ANSWER: X%, Y%` format, parsed by [`parse_answer`].

pub mod config;
pub mod conversation;
pub mod core;
pub mod likelihood;
pub mod profile;
pub mod prompt;
pub mod run;
pub mod signals;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity, SolverKind};
pub use conversation::{ChatRole, Conversation, ConversationLog, Message, Party, Utterance};
pub use core::{error::DomainError, model::Model};
pub use likelihood::{PriorSource, VoteLikelihood, parse_answer};
pub use profile::{
    Affiliation, Education, Gender, Issue, PriorDistribution, ProfileGenerator, VoterProfile,
};
pub use prompt::{PromptTemplate, PromptVersion};
pub use run::{
    AbortStage, ExperimentSummary, MetricValue, RunMetrics, RunOutcome, RunResult, RunStatus,
    SummaryStats,
};
pub use signals::{ViolationCounts, broke_character, contains_withdraw, output_empty_tags};
