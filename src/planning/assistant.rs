//! PlannerAssistant - conversation orchestration for the AI day planner
//!
//! The assistant owns the system prompt and sampling parameters; the
//! conversation itself belongs to the caller and is passed into every
//! call, so the assistant holds no mutable state and a single instance can
//! serve any number of conversations.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use super::ingest::{ParseError, tasks_from_response};
use crate::domain::Task;
use crate::llm::{ChatMessage, ChatRequest, LlmClient, LlmError};

/// Configuration for the planner assistant
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// System prompt prepended to every conversation
    pub system_prompt: String,

    /// Max tokens per reply
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_PLANNER_PROMPT.to_string(),
            max_tokens: 2048,
            temperature: 0.7,
        }
    }
}

/// Failure of an assistant operation
///
/// Both variants propagate to the immediate caller: no internal retry, no
/// fallback model. A parse failure means the working set was not touched
/// and the caller should offer a retry.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("AI bridge call failed: {0}")]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Orchestrates planner conversations over a stateless LLM client
pub struct PlannerAssistant {
    llm: Arc<dyn LlmClient>,
    config: AssistantConfig,
}

impl PlannerAssistant {
    /// Create a new assistant
    pub fn new(llm: Arc<dyn LlmClient>, config: AssistantConfig) -> Self {
        Self { llm, config }
    }

    /// One conversational turn
    ///
    /// Sends the system prompt, the caller's history, and the new user
    /// text; returns the assistant reply. The caller appends both sides to
    /// its own history if it wants the exchange remembered.
    pub async fn chat(&self, history: &[ChatMessage], text: &str) -> Result<String, AssistantError> {
        debug!(history_len = history.len(), "chat: called");
        let response = self.llm.complete(self.build_request(history, text)).await?;
        Ok(response.content)
    }

    /// Ask the model to emit the full day plan and parse it into drafts
    ///
    /// The reply is expected to carry a JSON task array per the ingestion
    /// contract; the parsed tasks are returned for the caller to ingest
    /// into its store.
    pub async fn generate_tasks(&self, history: &[ChatMessage]) -> Result<Vec<Task>, AssistantError> {
        debug!(history_len = history.len(), "generate_tasks: called");
        let response = self
            .llm
            .complete(self.build_request(history, TASK_LIST_REQUEST))
            .await?;

        let tasks = tasks_from_response(&response.content)?;
        info!(count = tasks.len(), "generate_tasks: parsed day plan");
        Ok(tasks)
    }

    fn build_request(&self, history: &[ChatMessage], text: &str) -> ChatRequest {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage::system(&self.config.system_prompt));
        messages.extend_from_slice(history);
        messages.push(ChatMessage::user(text));

        ChatRequest {
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        }
    }
}

/// Default system prompt for the day planner
const DEFAULT_PLANNER_PROMPT: &str = r#"You are a warm, practical day-planning assistant inside HerDeen, a companion app for Muslim women. You help the user shape her day around the five daily prayers, Quran reading, adhkar, and her own commitments.

Converse normally while gathering what she wants to accomplish. When she asks for her plan, reply with ONLY a JSON array of task objects, one per task, each with these fields:

- "title": short label
- "description": one sentence of detail
- "priority": "low", "medium" or "high"
- "estimatedDuration": minutes, as an integer
- "preferredTime": 24-hour "HH:MM" start time

Order the array the way the day should flow. Do not wrap the array in prose when asked for the plan.
"#;

/// User-turn instruction that requests the final task array
const TASK_LIST_REQUEST: &str =
    "Please produce my day plan now as a JSON array of task objects, with no other text.";
