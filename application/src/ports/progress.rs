//! Progress notification port
//!
//! Defines the interface for reporting progress during an experiment.

use canvass_domain::{ExperimentSummary, Party, RunStatus, VoterProfile};

/// Callback for progress updates during an experiment
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain log lines, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called once before the first run
    fn on_experiment_start(&self, total_runs: usize);

    /// Called when a run has finished, whatever its status
    fn on_run_complete(&self, index: usize, status: &RunStatus);

    /// Called when a run starts
    fn on_run_start(&self, _index: usize, _profile: &VoterProfile) {}

    /// Called after each generated turn
    fn on_turn(&self, _party: Party, _turn: usize) {}

    /// Called once after the last run
    fn on_experiment_complete(&self, _summary: &ExperimentSummary) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_experiment_start(&self, _total_runs: usize) {}
    fn on_run_complete(&self, _index: usize, _status: &RunStatus) {}
}
