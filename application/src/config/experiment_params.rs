//! Experiment parameters: batch loop control.

use serde::{Deserialize, Serialize};

/// Batch loop control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentParams {
    /// Number of independent runs
    pub num_experiments: usize,
    /// Seed for persona and prior sampling; random when `None`
    pub seed: Option<u64>,
}

impl Default for ExperimentParams {
    fn default() -> Self {
        Self {
            num_experiments: 100,
            seed: None,
        }
    }
}

impl ExperimentParams {
    pub fn with_num_experiments(mut self, n: usize) -> Self {
        self.num_experiments = n;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
