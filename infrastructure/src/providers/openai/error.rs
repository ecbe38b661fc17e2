//! Error types for the OpenAI-compatible provider

use canvass_application::GatewayError;
use thiserror::Error;

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Errors that can occur when talking to a chat completions endpoint
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("No API key: set `provider.api_key` or ${env_var}")]
    MissingApiKey { env_var: String },

    #[error("Response contained no choices")]
    NoChoices,
}

impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            ProviderError::Http(e) if e.is_connect() => {
                GatewayError::ConnectionError(e.to_string())
            }
            ProviderError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            ProviderError::Api { status: 401 | 403, body } => {
                GatewayError::AuthenticationError(body)
            }
            ProviderError::Api { status: 404, body } => GatewayError::ModelNotAvailable(body),
            ProviderError::Api { status, body } => {
                GatewayError::RequestFailed(format!("status {}: {}", status, body))
            }
            ProviderError::RateLimited => GatewayError::RateLimited,
            ProviderError::MissingApiKey { env_var } => {
                GatewayError::AuthenticationError(format!("${} is not set", env_var))
            }
            other => GatewayError::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let auth: GatewayError = ProviderError::Api {
            status: 401,
            body: "bad key".to_string(),
        }
        .into();
        assert!(matches!(auth, GatewayError::AuthenticationError(_)));

        let missing: GatewayError = ProviderError::Api {
            status: 404,
            body: "no such model".to_string(),
        }
        .into();
        assert!(matches!(missing, GatewayError::ModelNotAvailable(_)));

        let server: GatewayError = ProviderError::Api {
            status: 500,
            body: "oops".to_string(),
        }
        .into();
        assert!(matches!(server, GatewayError::RequestFailed(msg) if msg.contains("500")));

        let limited: GatewayError = ProviderError::RateLimited.into();
        assert!(matches!(limited, GatewayError::RateLimited));
    }
}
