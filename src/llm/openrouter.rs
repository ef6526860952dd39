//! OpenRouter gateway client implementation
//!
//! Implements the LlmClient trait against an OpenAI-compatible
//! chat-completions endpoint. One request per call: retry, deduplication
//! and cancellation are the caller's concern, so a rate limit or transient
//! failure is surfaced immediately rather than absorbed here.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{ChatMessage, ChatRequest, ChatResponse, LlmClient, LlmError, TokenUsage};
use crate::config::LlmConfig;

/// OpenRouter chat-completions client
#[derive(Debug)]
pub struct OpenRouterClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    max_tokens: u32,
}

impl OpenRouterClient {
    /// Create a new client from configuration
    ///
    /// Fails fast with a configuration error when the API-key environment
    /// variable is unset - nothing is sent over the network.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(model = %config.model, "from_config: called");
        let api_key = config
            .get_api_key()
            .map_err(|e| LlmError::Configuration(e.to_string()))?;

        let timeout = Duration::from_millis(config.timeout_ms);

        let http = Client::builder().timeout(timeout).build().map_err(LlmError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
            max_tokens: config.max_tokens,
        })
    }

    /// Build the request body for the chat-completions endpoint
    fn build_request_body(&self, request: &ChatRequest) -> serde_json::Value {
        debug!(%self.model, %request.max_tokens, "build_request_body: called");
        serde_json::json!({
            "model": self.model,
            "messages": self.convert_messages(&request.messages),
            "max_tokens": request.max_tokens.min(self.max_tokens),
            "temperature": request.temperature,
        })
    }

    /// Convert messages to the gateway's wire format
    fn convert_messages(&self, messages: &[ChatMessage]) -> Vec<serde_json::Value> {
        debug!(message_count = %messages.len(), "convert_messages: called");
        messages
            .iter()
            .map(|msg| {
                serde_json::json!({
                    "role": msg.role,
                    "content": msg.content,
                })
            })
            .collect()
    }

    /// Parse the gateway response
    fn parse_response(&self, api_response: GatewayResponse) -> Result<ChatResponse, LlmError> {
        debug!(choices = api_response.choices.len(), "parse_response: called");
        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("response contained no choices".to_string()))?;

        let content = choice
            .message
            .content
            .ok_or_else(|| LlmError::InvalidResponse("choice contained no content".to_string()))?;

        let usage = api_response
            .usage
            .map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(ChatResponse { content, usage })
    }
}

#[async_trait]
impl LlmClient for OpenRouterClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, LlmError> {
        debug!(%self.model, message_count = request.messages.len(), "complete: called");
        let url = format!("{}/chat/completions", self.base_url);
        let body = self.build_request_body(&request);

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(LlmError::Network)?;

        let status = response.status().as_u16();

        if status == 429 {
            debug!("complete: rate limited (429)");
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);

            return Err(LlmError::RateLimited {
                retry_after: Duration::from_secs(retry_after),
            });
        }

        if !response.status().is_success() {
            debug!(%status, "complete: API error");
            let text = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError { status, message: text });
        }

        debug!("complete: success");
        let api_response: GatewayResponse = response.json().await?;
        self.parse_response(api_response)
    }
}

// Gateway response types

#[derive(Debug, Deserialize)]
struct GatewayResponse {
    choices: Vec<GatewayChoice>,
    usage: Option<GatewayUsage>,
}

#[derive(Debug, Deserialize)]
struct GatewayChoice {
    message: GatewayMessage,
}

#[derive(Debug, Deserialize)]
struct GatewayMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GatewayUsage {
    prompt_tokens: u64,
    completion_tokens: u64,
}
