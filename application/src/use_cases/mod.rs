//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod extract_likelihood;
pub mod run_canvass;
pub mod run_experiment;
