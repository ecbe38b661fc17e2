//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — LLM models that back each party
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod model;
pub mod string;
