//! Single-completion solver

use super::non_blank;
use crate::config::RoleModel;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::solver::{Solver, TaskState};
use async_trait::async_trait;
use canvass_domain::Message;
use std::sync::Arc;
use tracing::debug;

/// Sends the task description as the system prompt followed by the
/// party's history, and returns the completion as the next turn.
pub struct DirectSolver<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    role: RoleModel,
}

impl<G: LlmGateway + 'static> DirectSolver<G> {
    pub fn new(gateway: Arc<G>, role: RoleModel) -> Self {
        Self { gateway, role }
    }
}

#[async_trait]
impl<G: LlmGateway + 'static> Solver for DirectSolver<G> {
    fn name(&self) -> String {
        format!("direct/{}", self.role.model)
    }

    async fn solve(&self, state: &TaskState) -> Result<Option<String>, GatewayError> {
        let mut messages = Vec::with_capacity(state.messages.len() + 1);
        messages.push(Message::system(state.task_description.clone()));
        messages.extend(state.messages.iter().cloned());

        debug!(
            "{} solving for {} with {} messages",
            self.name(),
            state.current_state.party,
            messages.len()
        );

        let request = CompletionRequest::new(self.role.model.clone(), messages)
            .with_temperature(self.role.temperature);
        let output = self.gateway.complete(request).await?;
        Ok(non_blank(output))
    }
}
