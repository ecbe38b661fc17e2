//! Canvasser solver selection

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Strategy the canvasser uses to produce each turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverKind {
    /// One completion per turn
    #[default]
    Direct,
    /// Private reasoning first, then the spoken reply
    Cot,
}

impl SolverKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolverKind::Direct => "direct",
            SolverKind::Cot => "cot",
        }
    }
}

impl std::fmt::Display for SolverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SolverKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" => Ok(SolverKind::Direct),
            "cot" | "chain-of-thought" => Ok(SolverKind::Cot),
            other => Err(DomainError::UnknownSolver(other.to_string())),
        }
    }
}
