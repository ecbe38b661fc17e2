//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod output_format;
mod solver_kind;
pub mod validation;

pub use output_format::OutputFormat;
pub use solver_kind::SolverKind;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
