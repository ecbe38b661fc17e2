//! Aggregate statistics across runs

use super::metrics::{self, RunMetrics};
use serde::{Deserialize, Serialize};

/// Descriptive statistics over one numeric metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
}

impl SummaryStats {
    /// Reduce a set of values; `None` for an empty set
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let sum: f64 = sorted.iter().sum();
        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };

        Some(Self {
            count,
            mean: sum / count as f64,
            median,
            min: sorted[0],
            max: sorted[count - 1],
            sum,
        })
    }

    /// Statistics of one key across records, skipping records without it
    pub fn for_key(records: &[RunMetrics], key: &str) -> Option<Self> {
        let values: Vec<f64> = records.iter().filter_map(|r| r.number(key)).collect();
        Self::from_values(&values)
    }
}

/// Summary of an experiment (many runs)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentSummary {
    pub completed_runs: usize,
    pub aborted_runs: usize,
    pub failed_runs: usize,

    pub mean_target_vote_likelihood: Option<f64>,
    pub mean_vote_likelihood: Option<f64>,
    pub prior_mean_target_vote_likelihood: Option<f64>,
    pub prior_mean_vote_likelihood: Option<f64>,
    pub mean_target_shift: Option<f64>,
    pub mean_vote_shift: Option<f64>,

    pub replies: Option<SummaryStats>,
    pub duration_sec: Option<SummaryStats>,

    /// Runs in which the signal fired at least once
    pub canvasser_broke_character_runs: usize,
    pub mark_broke_character_runs: usize,
    pub canvasser_empty_tags_runs: usize,
    pub mark_empty_tags_runs: usize,
    pub mark_withdraw_count: usize,
}

impl ExperimentSummary {
    /// Reduce completed-run records to summary statistics
    pub fn from_records(records: &[RunMetrics], aborted_runs: usize, failed_runs: usize) -> Self {
        let mean = |key: &str| SummaryStats::for_key(records, key).map(|s| s.mean);
        let nonzero_runs = |key: &str| {
            records
                .iter()
                .filter(|r| r.number(key).is_some_and(|v| v != 0.0))
                .count()
        };

        let mean_target = mean(metrics::TARGET_VOTE_LIKELIHOOD);
        let mean_vote = mean(metrics::VOTE_LIKELIHOOD);
        let prior_target = mean(metrics::PRIOR_TARGET_VOTE_LIKELIHOOD);
        let prior_vote = mean(metrics::PRIOR_VOTE_LIKELIHOOD);

        Self {
            completed_runs: records.len(),
            aborted_runs,
            failed_runs,
            mean_target_vote_likelihood: mean_target,
            mean_vote_likelihood: mean_vote,
            prior_mean_target_vote_likelihood: prior_target,
            prior_mean_vote_likelihood: prior_vote,
            mean_target_shift: mean_target.zip(prior_target).map(|(f, p)| f - p),
            mean_vote_shift: mean_vote.zip(prior_vote).map(|(f, p)| f - p),
            replies: SummaryStats::for_key(records, metrics::NUM_REPLIES),
            duration_sec: SummaryStats::for_key(records, metrics::DURATION_SEC),
            canvasser_broke_character_runs: nonzero_runs(metrics::CANVASSER_BROKE_CHARACTER_COUNT),
            mark_broke_character_runs: nonzero_runs(metrics::MARK_BROKE_CHARACTER_COUNT),
            canvasser_empty_tags_runs: nonzero_runs(metrics::CANVASSER_EMPTY_TAGS_COUNT),
            mark_empty_tags_runs: nonzero_runs(metrics::MARK_EMPTY_TAGS_COUNT),
            mark_withdraw_count: nonzero_runs(metrics::MARK_WITHDRAW),
        }
    }

    pub fn total_runs(&self) -> usize {
        self.completed_runs + self.aborted_runs + self.failed_runs
    }
}
