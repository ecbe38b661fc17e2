//! Run results and metrics aggregation
//!
//! - [`entities::RunResult`] — scalar outcome of one simulated call
//! - [`entities::RunOutcome`] — completed result or early abort
//! - [`metrics::RunMetrics`] — flat record of named scalars per run
//! - [`summary::ExperimentSummary`] — statistics across many runs

pub mod entities;
pub mod metrics;
pub mod summary;

pub use entities::{AbortStage, RunOutcome, RunResult, RunStatus};
pub use metrics::{MetricValue, RunMetrics};
pub use summary::{ExperimentSummary, SummaryStats};
