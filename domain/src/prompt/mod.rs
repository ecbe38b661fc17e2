//! Prompt domain
//!
//! Templates for the two personas, the likelihood elicitation prompts, the
//! summary extractor instruction and the chain-of-thought solver prompts.

mod template;
mod version;

pub use template::PromptTemplate;
pub use version::PromptVersion;
