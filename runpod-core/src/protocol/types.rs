//! Core protocol types for chat generation
//!
//! This module contains the data structures exchanged with a chat model:
//! - Role-tagged messages forming an ordered conversation
//! - Per-call generation options that override configured defaults
//! - The single-generation result returned by a model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Role of a message in the conversation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instructions that guide the model's behavior
    System,
    /// User input message
    Human,
    /// Assistant (model) response
    Assistant,
    /// Any other role; rendered without a prefix
    Custom(String),
}

impl MessageRole {
    /// Prompt prefix label for this role, if it has one
    pub fn label(&self) -> Option<&'static str> {
        match self {
            MessageRole::System => Some("System"),
            MessageRole::Human => Some("Human"),
            MessageRole::Assistant => Some("Assistant"),
            MessageRole::Custom(_) => None,
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::Human => write!(f, "human"),
            MessageRole::Assistant => write!(f, "assistant"),
            MessageRole::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// A message in the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    role: MessageRole,
    content: String,
}

impl Message {
    /// Create a message with an explicit role
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a human message
    pub fn human(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Human, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    /// Create a message with a role the prompt format does not know about
    pub fn custom(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(MessageRole::Custom(role.into()), content)
    }

    pub fn role(&self) -> &MessageRole {
        &self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

// ============================================================================
// Conversion traits
// ============================================================================

/// Trait for converting types into messages
pub trait IntoMessage {
    /// Convert self into a Message
    fn into_message(self) -> Message;
}

impl IntoMessage for Message {
    fn into_message(self) -> Message {
        self
    }
}

impl IntoMessage for String {
    fn into_message(self) -> Message {
        Message::human(self)
    }
}

impl IntoMessage for &str {
    fn into_message(self) -> Message {
        Message::human(self)
    }
}

/// Per-call overrides applied on top of the configured defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Stop sequences for this call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,

    /// Maximum tokens to generate for this call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Sampling temperature for this call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set stop sequences
    pub fn with_stop(mut self, stop: Vec<String>) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Add a single stop sequence
    pub fn with_stop_sequence(mut self, stop: impl Into<String>) -> Self {
        self.stop.get_or_insert_with(Vec::new).push(stop.into());
        self
    }

    /// Override max tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Override temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Result of a single generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResult {
    /// The generated assistant message
    pub message: Message,

    /// Whether the response matched the expected token layout
    pub matched_shape: bool,

    /// Job metadata reported by the remote service (id, status, timings)
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl ChatResult {
    /// Wrap generated text as an assistant message
    pub fn new(text: impl Into<String>, matched_shape: bool) -> Self {
        Self {
            message: Message::assistant(text),
            matched_shape,
            metadata: HashMap::new(),
        }
    }

    /// Add metadata
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Generated text
    pub fn content(&self) -> &str {
        self.message.content()
    }

    /// Whether the response matched the expected token layout
    pub fn matched_shape(&self) -> bool {
        self.matched_shape
    }

    /// Consume the result, returning the assistant message
    pub fn into_message(self) -> Message {
        self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        assert_eq!(Message::system("a").role(), &MessageRole::System);
        assert_eq!(Message::human("b").role(), &MessageRole::Human);
        assert_eq!(Message::assistant("c").role(), &MessageRole::Assistant);
        assert_eq!(
            Message::custom("tool", "d").role(),
            &MessageRole::Custom("tool".to_string())
        );
    }

    #[test]
    fn test_str_into_human_message() {
        let msg = "hello".into_message();
        assert_eq!(msg.role(), &MessageRole::Human);
        assert_eq!(msg.content(), "hello");
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(MessageRole::System.label(), Some("System"));
        assert_eq!(MessageRole::Custom("x".into()).label(), None);
    }

    #[test]
    fn test_options_builder() {
        let opts = GenerateOptions::new()
            .with_max_tokens(50)
            .with_stop_sequence("\n\n")
            .with_stop_sequence("Human:");

        assert_eq!(opts.max_tokens, Some(50));
        assert_eq!(opts.temperature, None);
        assert_eq!(opts.stop.as_deref().map(|s| s.len()), Some(2));
    }

    #[test]
    fn test_chat_result_is_assistant() {
        let result = ChatResult::new("hi", true).with_metadata("id", serde_json::json!("job-1"));
        assert_eq!(result.message.role(), &MessageRole::Assistant);
        assert_eq!(result.content(), "hi");
        assert!(result.matched_shape());
        assert_eq!(result.metadata["id"], "job-1");
    }
}
