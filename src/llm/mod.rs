//! LLM client module for the AI bridge
//!
//! Provides the stateless client trait, the gateway implementation, and
//! the chat types the planner exchanges with it.

use std::sync::Arc;

use tracing::debug;

pub mod client;
mod error;
mod openrouter;
mod types;

pub use client::LlmClient;
pub use error::LlmError;
pub use openrouter::OpenRouterClient;
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role, TokenUsage};

use crate::config::LlmConfig;

/// Create an LLM client based on the provider specified in config
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    debug!(provider = %config.provider, model = %config.model, "create_client: called");
    match config.provider.as_str() {
        "openrouter" => {
            debug!("create_client: creating OpenRouter client");
            Ok(Arc::new(OpenRouterClient::from_config(config)?))
        }
        other => {
            debug!(provider = %other, "create_client: unknown provider");
            Err(LlmError::Configuration(format!(
                "Unknown LLM provider: '{}'. Supported: openrouter",
                other
            )))
        }
    }
}
