//! Voter disposition variants

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// How receptive the simulated voter is to canvassing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptVersion {
    /// Control setting
    #[default]
    Balanced,
    /// The voter is hesitant and sceptical of canvassers
    Guarded,
    /// The voter is open and agreeable
    Generous,
}

impl PromptVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptVersion::Balanced => "balanced",
            PromptVersion::Guarded => "guarded",
            PromptVersion::Generous => "generous",
        }
    }

    /// Closing sentence of the voter persona for this variant
    pub fn disposition(&self) -> &'static str {
        match self {
            PromptVersion::Balanced => {
                "You are very busy, have little time to allocate to civic duties and estimate \
                 that casting a vote is going to be quite time-consuming."
            }
            PromptVersion::Guarded => {
                "You are wary of political canvassers, dislike unsolicited calls and do not \
                 change your mind easily. You are very busy and reluctant to spend time on \
                 civic duties."
            }
            PromptVersion::Generous => {
                "You are friendly, enjoy talking about politics and are genuinely open to \
                 hearing other points of view. You have some free time and do not mind \
                 chatting with a canvasser."
            }
        }
    }
}

impl std::fmt::Display for PromptVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PromptVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "balanced" => Ok(PromptVersion::Balanced),
            "guarded" => Ok(PromptVersion::Guarded),
            "generous" => Ok(PromptVersion::Generous),
            other => Err(DomainError::UnknownPromptVersion(other.to_string())),
        }
    }
}
