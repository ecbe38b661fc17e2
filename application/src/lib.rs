//! Application layer for canvass-sim
//!
//! This crate contains use cases, port definitions, solvers, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod solvers;
pub mod use_cases;

// Re-export commonly used types
pub use config::{CanvassSettings, ExperimentParams, ModelConfig, RoleModel};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway},
    metrics_recorder::{InMemoryMetricsRecorder, MetricsRecorder},
    progress::{NoProgress, ProgressNotifier},
    solver::{CurrentState, Solver, TaskState},
};
pub use solvers::{ChainOfThoughtSolver, DirectSolver, canvasser_solver};
pub use use_cases::extract_likelihood::{
    Extraction, ExtractionError, ExtractionStage, ExtractLikelihoodUseCase,
};
pub use use_cases::run_canvass::{RunCanvassError, RunCanvassInput, RunCanvassUseCase};
pub use use_cases::run_experiment::{
    ExperimentReport, RunExperimentError, RunExperimentInput, RunExperimentUseCase, RunReport,
};
