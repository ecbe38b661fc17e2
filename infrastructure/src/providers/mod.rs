//! LLM provider adapters

pub mod openai;

pub use openai::{OpenAiCompatibleGateway, ProviderError};
