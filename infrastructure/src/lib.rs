//! Infrastructure layer for canvass-sim
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileExperimentConfig, FileLoggingConfig, FileModelsConfig,
    FileOutputConfig, FileProviderConfig,
};
pub use logging::JsonlConversationLogger;
pub use providers::{OpenAiCompatibleGateway, ProviderError};
