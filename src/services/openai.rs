//! OpenAI chat-completions service implementation
//!
//! This service sends a single system + user exchange to the chat-completions
//! endpoint and classifies every failure into a [`GatewayError`].

use std::borrow::Cow;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::gateway::{CompletionGateway, CompletionRequest};
use crate::config::OpenAiConfig;
use crate::utils::errors::{GatewayError, GatewayResult, GptBuddyError, Result};
use crate::utils::helpers::truncate_text;

/// Request body for `POST /chat/completions`
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// OpenAI-compatible completion service
#[derive(Clone)]
pub struct OpenAiService {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    /// Appended to every system message when a reply language is configured
    language_rule: Option<String>,
}

impl OpenAiService {
    /// Create a new OpenAiService instance
    pub fn new(config: &OpenAiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("GptBuddy-Bot/1.0")
            .build()
            .map_err(GptBuddyError::Http)?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            endpoint: format!("{}/chat/completions", config.api_url.trim_end_matches('/')),
            model: config.model.clone(),
            language_rule: config
                .reply_language
                .as_deref()
                .map(|language| format!("Always reply in {}.", language.trim())),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_body<'a>(&'a self, request: &'a CompletionRequest) -> ChatRequest<'a> {
        let system = match (request.system_instruction.as_deref(), self.language_rule.as_deref()) {
            (Some(instruction), Some(rule)) => Some(Cow::Owned(format!("{}\n\n{}", instruction, rule))),
            (Some(instruction), None) => Some(Cow::Borrowed(instruction)),
            (None, Some(rule)) => Some(Cow::Borrowed(rule)),
            (None, None) => None,
        };

        let mut messages = Vec::with_capacity(2);
        if let Some(content) = system {
            messages.push(ChatMessage { role: "system", content });
        }
        messages.push(ChatMessage { role: "user", content: Cow::Borrowed(request.user_text.as_str()) });

        ChatRequest {
            model: &self.model,
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

#[async_trait]
impl CompletionGateway for OpenAiService {
    async fn complete(&self, request: &CompletionRequest) -> GatewayResult<String> {
        debug!(
            model = %self.model,
            has_instruction = request.system_instruction.is_some(),
            max_tokens = request.max_tokens,
            "Sending completion request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.build_body(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::from_status(status.as_u16(), &truncate_text(&body, 200)));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::invalid_response(e.to_string()))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(GatewayError::empty_reply)?;

        info!(chars = text.chars().count(), "Completion received");
        Ok(text)
    }
}

impl std::fmt::Debug for OpenAiService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiService")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("language_rule", &self.language_rule)
            .finish_non_exhaustive()
    }
}
