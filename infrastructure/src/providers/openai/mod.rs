//! OpenAI-compatible chat completions provider

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::ProviderError;
pub use gateway::OpenAiCompatibleGateway;
