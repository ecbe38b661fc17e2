//! Two-step chain-of-thought solver for the canvasser.
//!
//! ```text
//! system: preamble + task description
//! ...history...
//! user:   reasoning request + "You only have N turns left!"   → reasoning (private)
//! assistant: reasoning
//! user:   "Now write your response to the individual."       → reply
//! ```
//!
//! Only the reply is returned; the reasoning never enters either log.

use super::non_blank;
use crate::config::RoleModel;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::solver::{Solver, TaskState};
use async_trait::async_trait;
use canvass_domain::{Message, PromptTemplate};
use std::sync::Arc;
use tracing::debug;

pub struct ChainOfThoughtSolver<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    role: RoleModel,
}

impl<G: LlmGateway + 'static> ChainOfThoughtSolver<G> {
    pub fn new(gateway: Arc<G>, role: RoleModel) -> Self {
        Self { gateway, role }
    }

    async fn complete(&self, messages: Vec<Message>) -> Result<String, GatewayError> {
        let request = CompletionRequest::new(self.role.model.clone(), messages)
            .with_temperature(self.role.temperature);
        self.gateway.complete(request).await
    }
}

#[async_trait]
impl<G: LlmGateway + 'static> Solver for ChainOfThoughtSolver<G> {
    fn name(&self) -> String {
        format!("cot/{}", self.role.model)
    }

    async fn solve(&self, state: &TaskState) -> Result<Option<String>, GatewayError> {
        let system = format!(
            "{}\n{}",
            PromptTemplate::cot_canvasser_preamble(state.current_state.max_turns),
            state.task_description
        );

        let mut messages = Vec::with_capacity(state.messages.len() + 4);
        messages.push(Message::system(system));
        messages.extend(state.messages.iter().cloned());
        messages.push(Message::user(format!(
            "{} {}",
            PromptTemplate::cot_reasoning(),
            PromptTemplate::time_reminder(state.current_state.turns_left)
        )));

        let Some(reasoning) = non_blank(self.complete(messages.clone()).await?) else {
            return Ok(None);
        };
        debug!("{} reasoning: {} bytes", self.name(), reasoning.len());

        messages.push(Message::assistant(reasoning));
        messages.push(Message::user(PromptTemplate::cot_extract()));

        Ok(non_blank(self.complete(messages).await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::solver::CurrentState;
    use crate::solvers::testing::ScriptedGateway;
    use canvass_domain::{ChatRole, Model, Party, PromptVersion};

    fn state() -> TaskState {
        TaskState {
            task_description: "Canvass for the Democrats.".to_string(),
            messages: vec![Message::user("Hello, this is Sam.")],
            current_state: CurrentState {
                party: Party::Canvasser,
                prompt_version: PromptVersion::Balanced,
                turns_left: 2,
                max_turns: 4,
                allow_withdraw: false,
            },
        }
    }

    #[tokio::test]
    async fn test_cot_returns_only_reply() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            "Sam sounds busy; keep it short.",
            "Hi Sam! Just one quick question about the election.",
        ]));
        let solver = ChainOfThoughtSolver::new(
            Arc::clone(&gateway),
            RoleModel::new(Model::Gpt4o, None),
        );

        let output = solver.solve(&state()).await.unwrap();
        assert_eq!(
            output.as_deref(),
            Some("Hi Sam! Just one quick question about the election.")
        );

        let requests = gateway.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);

        let first = &requests[0].messages;
        assert!(first[0].content.contains("politically savvy canvasser"));
        assert!(first[0].content.contains("Canvass for the Democrats."));
        assert!(first.last().unwrap().content.contains("You only have 2 turns left!"));

        let second = &requests[1].messages;
        assert_eq!(second[second.len() - 2].role, ChatRole::Assistant);
        assert_eq!(second[second.len() - 2].content, "Sam sounds busy; keep it short.");
        assert_eq!(
            second.last().unwrap().content,
            "Now write your response to the individual."
        );
    }

    #[tokio::test]
    async fn test_cot_blank_reasoning_stops_early() {
        let gateway = Arc::new(ScriptedGateway::new(vec![""]));
        let solver = ChainOfThoughtSolver::new(
            Arc::clone(&gateway),
            RoleModel::new(Model::Gpt4o, None),
        );
        assert_eq!(solver.solve(&state()).await.unwrap(), None);
        assert_eq!(gateway.request_count(), 1);
    }
}
