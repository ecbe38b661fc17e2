//! Solver implementations backed by an [`LlmGateway`](crate::ports::llm_gateway::LlmGateway).
//!
//! | Solver | Completions per turn | Used for |
//! |--------|----------------------|----------|
//! | [`DirectSolver`] | 1 | mark, plain canvasser |
//! | [`ChainOfThoughtSolver`] | 2 (reasoning, reply) | elicited canvasser |

mod cot;
mod direct;

pub use cot::ChainOfThoughtSolver;
pub use direct::DirectSolver;

use crate::config::RoleModel;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::solver::Solver;
use canvass_domain::SolverKind;
use std::sync::Arc;

/// Build the canvasser's solver for the configured strategy
pub fn canvasser_solver<G: LlmGateway + 'static>(
    kind: SolverKind,
    gateway: Arc<G>,
    role: RoleModel,
) -> Arc<dyn Solver> {
    match kind {
        SolverKind::Direct => Arc::new(DirectSolver::new(gateway, role)),
        SolverKind::Cot => Arc::new(ChainOfThoughtSolver::new(gateway, role)),
    }
}

/// Treat blank output as no output
fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
