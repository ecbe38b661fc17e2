//! Likelihood value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A voter's self-reported vote probabilities, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoteLikelihood {
    /// Likelihood of voting for the canvassed party over the other
    pub target: f64,
    /// Likelihood of casting a vote at all
    pub turnout: f64,
}

impl VoteLikelihood {
    pub fn new(target: f64, turnout: f64) -> Self {
        Self { target, turnout }
    }

    /// Create a likelihood, rejecting values outside 0..=100
    pub fn checked(target: f64, turnout: f64) -> Result<Self, DomainError> {
        for value in [target, turnout] {
            if !(0.0..=100.0).contains(&value) {
                return Err(DomainError::LikelihoodOutOfRange(value));
            }
        }
        Ok(Self::new(target, turnout))
    }

    /// Component-wise difference `self - earlier`
    pub fn shift_from(&self, earlier: &VoteLikelihood) -> VoteLikelihood {
        VoteLikelihood {
            target: self.target - earlier.target,
            turnout: self.turnout - earlier.turnout,
        }
    }
}

impl std::fmt::Display for VoteLikelihood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}% / {:.1}%", self.target, self.turnout)
    }
}

/// Where a run's prior likelihood came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorSource {
    /// Asked of the mark before the call, then stripped from its history
    Elicited,
    /// Sampled from the affiliation distribution and stated in the persona
    Sampled,
}
