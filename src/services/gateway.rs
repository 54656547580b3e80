//! Completion gateway contract
//!
//! The flows only see this trait. The production implementation is
//! [`super::openai::OpenAiService`].

use async_trait::async_trait;

use crate::utils::errors::GatewayResult;

/// A single completion call
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Role instruction sent as the system message
    pub system_instruction: Option<String>,
    pub user_text: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(user_text: impl Into<String>) -> Self {
        Self {
            system_instruction: None,
            user_text: user_text.into(),
            max_tokens: 1000,
            temperature: 0.7,
        }
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_limits(mut self, max_tokens: u32, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }
}

/// Language-model completion endpoint
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Return the generated text, trimmed and non-empty
    async fn complete(&self, request: &CompletionRequest) -> GatewayResult<String>;
}
