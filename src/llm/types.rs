//! Chat request/response types for the AI bridge
//!
//! These model an OpenAI-compatible chat-completions gateway, which is the
//! wire shape the planner's LLM provider speaks. Conversation state is a
//! caller-owned list of messages passed into every request - nothing here
//! accumulates history.

use serde::{Deserialize, Serialize};

/// Everything needed for one completion call
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Full conversation, system message first
    pub messages: Vec<ChatMessage>,

    /// Max tokens for the reply
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,
}

/// A role-tagged message in the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// Reply from a completion call
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// The assistant's text
    pub content: String,

    /// Token usage reported by the gateway
    pub usage: TokenUsage,
}

/// Token usage for cost visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let msg = ChatMessage::user("Plan my day");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Plan my day");

        assert_eq!(ChatMessage::system("x").role, Role::System);
        assert_eq!(ChatMessage::assistant("x").role, Role::Assistant);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    }

    #[test]
    fn test_message_wire_shape() {
        let json = serde_json::to_value(ChatMessage::user("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hi"}));
    }
}
