//! Extract Likelihood use case.
//!
//! Turns a voter's free-text answer into a [`VoteLikelihood`]:
//!
//! 1. Apply the `ANSWER: X%, Y%` pattern to the text (last match wins; percentages
//!    above 100 count as a miss)
//! 2. On a miss, ask the summary model to restate the answer and re-apply
//! 3. On a second miss, fail with [`ExtractionError::NoAnswer`]

use crate::config::RoleModel;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use canvass_domain::core::string::truncate;
use canvass_domain::{Message, PromptTemplate, VoteLikelihood, parse_answer};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Bytes of each text kept in [`ExtractionError::NoAnswer`]
const EXCERPT_LEN: usize = 200;

/// Which elicitation an extraction belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStage {
    Prior,
    Final,
}

impl ExtractionStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionStage::Prior => "prior",
            ExtractionStage::Final => "final",
        }
    }
}

impl std::fmt::Display for ExtractionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("No answer found in voter output ({text:?}) or summary ({summary_output:?})")]
    NoAnswer {
        text: String,
        summary_output: String,
    },

    #[error("Summary model error: {0}")]
    Gateway(#[from] GatewayError),
}

/// A parsed likelihood plus whether the summary model was needed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extraction {
    pub likelihood: VoteLikelihood,
    pub via_summary: bool,
}

pub struct ExtractLikelihoodUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    summary: RoleModel,
}

impl<G: LlmGateway + 'static> ExtractLikelihoodUseCase<G> {
    pub fn new(gateway: Arc<G>, summary: RoleModel) -> Self {
        Self { gateway, summary }
    }

    pub async fn execute(&self, text: &str) -> Result<Extraction, ExtractionError> {
        if let Some(likelihood) = parse_answer(text) {
            return Ok(Extraction {
                likelihood,
                via_summary: false,
            });
        }

        debug!("No answer in voter output, asking {}", self.summary.model);

        let request = CompletionRequest::new(
            self.summary.model.clone(),
            vec![
                Message::system(PromptTemplate::summary_system()),
                Message::user(text),
            ],
        )
        .with_temperature(self.summary.temperature);
        let summary_output = self.gateway.complete(request).await?;

        match parse_answer(&summary_output) {
            Some(likelihood) => Ok(Extraction {
                likelihood,
                via_summary: true,
            }),
            None => {
                warn!("Summary model output had no answer either");
                Err(ExtractionError::NoAnswer {
                    text: truncate(text, EXCERPT_LEN),
                    summary_output: truncate(&summary_output, EXCERPT_LEN),
                })
            }
        }
    }
}
