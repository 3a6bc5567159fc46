//! Chat model capability trait
//!
//! Orchestration layers depend on [`ChatModel`] rather than on a concrete
//! provider; adapting to a particular framework means wrapping a
//! `dyn ChatModel`.

use crate::protocol::{ChatResult, GenerateOptions, IntoMessage, Message};
use crate::providers::error::RunPodResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Core trait that chat model providers implement
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Short identifier of the model type
    fn llm_type(&self) -> &str;

    /// Parameters that identify this model instance for logging and debugging
    fn identifying_params(&self) -> IdentifyingParams;

    /// Generate one assistant reply for an ordered conversation
    async fn generate(
        &self,
        messages: &[Message],
        options: GenerateOptions,
    ) -> RunPodResult<ChatResult>;

    /// Send a single human message with default options
    ///
    /// Takes `&str` rather than `impl IntoMessage` so the trait stays usable
    /// as `dyn ChatModel`.
    async fn invoke(&self, input: &str) -> RunPodResult<Message> {
        let result = self
            .generate(&[input.into_message()], GenerateOptions::default())
            .await?;
        Ok(result.into_message())
    }
}

/// Identifying parameters of a configured model; never includes credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifyingParams {
    pub endpoint_id: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::MessageRole;
    use std::sync::Mutex;

    /// Echoes the last message back and remembers what it was given
    struct EchoModel {
        seen: Mutex<Vec<Message>>,
    }

    #[async_trait]
    impl ChatModel for EchoModel {
        fn llm_type(&self) -> &str {
            "echo"
        }

        fn identifying_params(&self) -> IdentifyingParams {
            IdentifyingParams {
                endpoint_id: "echo".to_string(),
                max_tokens: 1,
                temperature: 0.0,
            }
        }

        async fn generate(
            &self,
            messages: &[Message],
            _options: GenerateOptions,
        ) -> RunPodResult<ChatResult> {
            self.seen.lock().unwrap().extend_from_slice(messages);
            let last = messages.last().map(Message::content).unwrap_or_default();
            Ok(ChatResult::new(last, true))
        }
    }

    #[tokio::test]
    async fn test_invoke_sends_one_human_message() {
        let model = EchoModel {
            seen: Mutex::new(Vec::new()),
        };
        let reply = model.invoke("ping").await.unwrap();

        assert_eq!(reply.role(), &MessageRole::Assistant);
        assert_eq!(reply.content(), "ping");

        let seen = model.seen.lock().unwrap();
        assert_eq!(seen.as_slice(), &[Message::human("ping")]);
    }
}
