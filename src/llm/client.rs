//! LlmClient trait definition

use async_trait::async_trait;

use super::{ChatRequest, ChatResponse, LlmError};

/// Stateless LLM client - each call is independent
///
/// This is the core abstraction for the AI bridge. Conversation state
/// lives with the caller and is passed in on every request, which keeps
/// the client trivially mockable and lets one client serve any number of
/// concurrent conversations.
#[async_trait]
pub trait LlmClient: Send + Sync + std::fmt::Debug {
    /// Send a single completion request
    ///
    /// One in-flight request per invocation; no internal retry, no
    /// fallback model. Failures propagate to the immediate caller.
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, LlmError>;
}
