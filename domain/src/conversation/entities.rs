//! Conversation entities

use serde::{Deserialize, Serialize};

/// A participant in the simulated phone call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Party {
    /// The persuading agent
    Canvasser,
    /// The voter being persuaded
    Mark,
}

impl Party {
    /// The other participant in the call
    pub fn other(self) -> Party {
        match self {
            Party::Canvasser => Party::Mark,
            Party::Mark => Party::Canvasser,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Party::Canvasser => "canvasser",
            Party::Mark => "mark",
        }
    }
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a message as seen by the model that receives it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// A message in one party's view of the conversation (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: ChatRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// A line of the call transcript, attributed to the party that said it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    pub party: Party,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_other() {
        assert_eq!(Party::Canvasser.other(), Party::Mark);
        assert_eq!(Party::Mark.other(), Party::Canvasser);
    }

    #[test]
    fn test_message_constructors() {
        assert_eq!(Message::user("hi").role, ChatRole::User);
        assert_eq!(Message::assistant("hi").role, ChatRole::Assistant);
        assert_eq!(Message::system("rules").role, ChatRole::System);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::assistant("ok")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"ok"}"#);
    }
}
