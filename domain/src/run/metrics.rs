//! Flat per-run metric records

use super::entities::RunResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const TARGET_VOTE_LIKELIHOOD: &str = "target_vote_likelihood";
pub const VOTE_LIKELIHOOD: &str = "vote_likelihood";
pub const PRIOR_TARGET_VOTE_LIKELIHOOD: &str = "prior_target_vote_likelihood";
pub const PRIOR_VOTE_LIKELIHOOD: &str = "prior_vote_likelihood";
pub const NUM_REPLIES: &str = "num_replies";
pub const TURNS_COMPLETED: &str = "turns_completed";
pub const DURATION_SEC: &str = "duration_sec";
pub const CANVASSER_BROKE_CHARACTER_COUNT: &str = "canvasser_broke_character_count";
pub const CANVASSER_EMPTY_TAGS_COUNT: &str = "canvasser_empty_tags_count";
pub const MARK_BROKE_CHARACTER_COUNT: &str = "mark_broke_character_count";
pub const MARK_EMPTY_TAGS_COUNT: &str = "mark_empty_tags_count";
pub const MARK_WITHDRAW: &str = "mark_withdraw";
pub const VOTER_AFFILIATION: &str = "voter_affiliation";
pub const PRIOR_SOURCE: &str = "prior_source";

/// A single named scalar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl MetricValue {
    /// Numeric view; booleans count as 0/1
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Number(n) => Some(*n),
            MetricValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            MetricValue::Text(_) => None,
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

impl From<usize> for MetricValue {
    fn from(value: usize) -> Self {
        MetricValue::Number(value as f64)
    }
}

impl From<u32> for MetricValue {
    fn from(value: u32) -> Self {
        MetricValue::Number(f64::from(value))
    }
}

impl From<bool> for MetricValue {
    fn from(value: bool) -> Self {
        MetricValue::Bool(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}

/// Flat record of named scalar metrics for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunMetrics {
    values: BTreeMap<String, MetricValue>,
}

impl RunMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MetricValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&MetricValue> {
        self.values.get(key)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(MetricValue::as_f64)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<&RunResult> for RunMetrics {
    fn from(result: &RunResult) -> Self {
        let mut metrics = RunMetrics::new();
        metrics.insert(TARGET_VOTE_LIKELIHOOD, result.final_likelihood.target);
        metrics.insert(VOTE_LIKELIHOOD, result.final_likelihood.turnout);
        metrics.insert(PRIOR_TARGET_VOTE_LIKELIHOOD, result.prior.target);
        metrics.insert(PRIOR_VOTE_LIKELIHOOD, result.prior.turnout);
        metrics.insert(NUM_REPLIES, result.num_replies);
        metrics.insert(TURNS_COMPLETED, result.turns_completed);
        metrics.insert(DURATION_SEC, result.duration.as_secs_f64());
        metrics.insert(
            CANVASSER_BROKE_CHARACTER_COUNT,
            result.canvasser_violations.broke_character,
        );
        metrics.insert(CANVASSER_EMPTY_TAGS_COUNT, result.canvasser_violations.empty_tags);
        metrics.insert(MARK_BROKE_CHARACTER_COUNT, result.mark_violations.broke_character);
        metrics.insert(MARK_EMPTY_TAGS_COUNT, result.mark_violations.empty_tags);
        metrics.insert(MARK_WITHDRAW, result.mark_withdrew);
        metrics.insert(VOTER_AFFILIATION, result.voter_affiliation.as_str());
        metrics.insert(
            PRIOR_SOURCE,
            match result.prior_source {
                crate::likelihood::PriorSource::Elicited => "elicited",
                crate::likelihood::PriorSource::Sampled => "sampled",
            },
        );
        metrics
    }
}
