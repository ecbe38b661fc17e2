//! Per-call rules.

use canvass_domain::{PromptVersion, SolverKind};
use serde::{Deserialize, Serialize};

/// Rules of a single simulated call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvassSettings {
    /// Maximum number of canvasser/mark exchange pairs (must be non-zero)
    pub turn_cap: usize,
    /// Tell both parties they may end the call with `[WITHDRAW]`
    pub allow_withdraw: bool,
    /// Brief the canvasser on the voter's demographics and leaning
    pub access_info: bool,
    /// Sample the prior and state it in the persona instead of eliciting it
    pub fix_prior: bool,
    pub prompt_version: PromptVersion,
    pub solver: SolverKind,
}

impl Default for CanvassSettings {
    fn default() -> Self {
        Self {
            turn_cap: 4,
            allow_withdraw: false,
            access_info: true,
            fix_prior: true,
            prompt_version: PromptVersion::Balanced,
            solver: SolverKind::Direct,
        }
    }
}

impl CanvassSettings {
    // ==================== Builder Methods ====================

    pub fn with_turn_cap(mut self, turn_cap: usize) -> Self {
        self.turn_cap = turn_cap;
        self
    }

    pub fn with_allow_withdraw(mut self, allow: bool) -> Self {
        self.allow_withdraw = allow;
        self
    }

    pub fn with_access_info(mut self, access: bool) -> Self {
        self.access_info = access;
        self
    }

    pub fn with_fix_prior(mut self, fix: bool) -> Self {
        self.fix_prior = fix;
        self
    }

    pub fn with_prompt_version(mut self, version: PromptVersion) -> Self {
        self.prompt_version = version;
        self
    }

    pub fn with_solver(mut self, solver: SolverKind) -> Self {
        self.solver = solver;
        self
    }
}
