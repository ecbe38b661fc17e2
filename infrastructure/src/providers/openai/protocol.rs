//! Chat completions wire types

use canvass_application::CompletionRequest;
use canvass_domain::Message;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    /// `null` when the model refuses or only calls tools
    #[serde(default)]
    pub content: Option<String>,
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role.as_str().to_string(),
            content: Some(message.content.clone()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Build the wire request; the request's own limit wins over the default
    pub fn from_completion(request: &CompletionRequest, default_max_tokens: Option<u32>) -> Self {
        Self {
            model: request.model.as_str().to_string(),
            messages: request.messages.iter().map(ChatMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens.or(default_max_tokens),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Text of the first choice; an absent message body reads as empty
    pub fn first_content(&self) -> Option<String> {
        self.choices
            .first()
            .map(|choice| choice.message.content.clone().unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvass_domain::Model;

    #[test]
    fn test_request_serialization() {
        let completion = CompletionRequest::new(
            Model::Gpt4oMini,
            vec![Message::system("You are a voter."), Message::user("Hello?")],
        )
        .with_temperature(Some(1.0));

        let request = ChatRequest::from_completion(&completion, None);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "Hello?");
        assert_eq!(json["temperature"], 1.0);
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn test_default_max_tokens() {
        let completion = CompletionRequest::new(Model::Gpt4o, vec![]);
        let request = ChatRequest::from_completion(&completion, Some(512));
        assert_eq!(request.max_tokens, Some(512));

        let mut completion = completion;
        completion.max_tokens = Some(64);
        let request = ChatRequest::from_completion(&completion, Some(512));
        assert_eq!(request.max_tokens, Some(64));
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "Hi there"}, "finish_reason": "stop"}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
        }"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_content().as_deref(), Some("Hi there"));
        assert_eq!(response.usage.unwrap().completion_tokens, 3);
    }

    #[test]
    fn test_null_content_reads_as_empty() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_content().as_deref(), Some(""));

        let empty: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(empty.first_content().is_none());
    }
}
