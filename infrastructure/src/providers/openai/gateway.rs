//! LLM Gateway implementation for OpenAI-compatible endpoints

use super::error::{ProviderError, Result};
use super::protocol::{ChatRequest, ChatResponse};
use crate::config::FileProviderConfig;
use async_trait::async_trait;
use canvass_application::{CompletionRequest, GatewayError, LlmGateway};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, trace};

/// Gateway posting to `{base_url}/v1/chat/completions`.
///
/// Works against OpenAI itself and any server speaking the same protocol
/// (vLLM, Ollama, OpenRouter, ...).
pub struct OpenAiCompatibleGateway {
    client: Client,
    endpoint: String,
    api_key: String,
    max_tokens: Option<u32>,
}

impl OpenAiCompatibleGateway {
    pub fn new(base_url: &str, api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: chat_completions_url(base_url),
            api_key: api_key.into(),
            max_tokens: None,
        })
    }

    /// Build from the `[provider]` config section, resolving the API key
    pub fn from_config(config: &FileProviderConfig) -> Result<Self> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(|| ProviderError::MissingApiKey {
                env_var: config.api_key_env.clone(),
            })?;
        let mut gateway = Self::new(
            &config.base_url,
            api_key,
            Duration::from_secs(config.timeout_secs),
        )?;
        gateway.max_tokens = config.max_tokens;
        Ok(gateway)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, request: &ChatRequest) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: ChatResponse = serde_json::from_str(&body)?;
        if let Some(usage) = &parsed.usage {
            trace!(
                "Usage: {} prompt / {} completion tokens",
                usage.prompt_tokens, usage.completion_tokens
            );
        }
        parsed.first_content().ok_or(ProviderError::NoChoices)
    }
}

#[async_trait]
impl LlmGateway for OpenAiCompatibleGateway {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> std::result::Result<String, GatewayError> {
        let wire = ChatRequest::from_completion(&request, self.max_tokens);
        debug!(
            "POST {} model={} messages={}",
            self.endpoint,
            wire.model,
            wire.messages.len()
        );
        Ok(self.send(&wire).await?)
    }
}

/// Accept base URLs with or without a trailing `/v1`
fn chat_completions_url(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if base.ends_with("/v1") {
        format!("{}/chat/completions", base)
    } else {
        format!("{}/v1/chat/completions", base)
    }
}
