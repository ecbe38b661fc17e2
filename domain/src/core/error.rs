//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown prompt version: {0}")]
    UnknownPromptVersion(String),

    #[error("Unknown solver: {0}")]
    UnknownSolver(String),

    #[error("Likelihood out of range: {0}")]
    LikelihoodOutOfRange(f64),
}
