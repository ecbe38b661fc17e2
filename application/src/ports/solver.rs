//! Solver port
//!
//! A solver turns a party's task description and visible history into that
//! party's next utterance.

use crate::ports::llm_gateway::GatewayError;
use async_trait::async_trait;
use canvass_domain::{Message, Party, PromptVersion};
use serde::Serialize;

/// Dynamic state of the call handed to the solver alongside the history
#[derive(Debug, Clone, Serialize)]
pub struct CurrentState {
    pub party: Party,
    pub prompt_version: PromptVersion,
    pub turns_left: usize,
    pub max_turns: usize,
    pub allow_withdraw: bool,
}

/// Everything a solver may look at to produce a turn
#[derive(Debug, Clone)]
pub struct TaskState {
    pub task_description: String,
    /// The party's own view of the conversation
    pub messages: Vec<Message>,
    pub current_state: CurrentState,
}

/// Produces one party's next utterance
#[async_trait]
pub trait Solver: Send + Sync {
    /// Short identifier for logs
    fn name(&self) -> String;

    /// Generate the next turn.
    ///
    /// `Ok(None)` means the solver produced no output; the run is aborted.
    async fn solve(&self, state: &TaskState) -> Result<Option<String>, GatewayError>;
}
