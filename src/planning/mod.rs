//! Plan generation and AI response ingestion
//!
//! - [`schedule`] - pure transformation from draft tasks to a time-stamped
//!   plan
//! - [`ingest`] - pulling a JSON task array out of free-form model text
//! - [`assistant`] - conversation orchestration over the LLM client

pub mod assistant;
pub mod ingest;
mod schedule;

pub use assistant::{AssistantConfig, AssistantError, PlannerAssistant};
pub use ingest::{AiTaskEntry, Extraction, ParseError, extract_json_array, parse_task_list, tasks_from_response};
pub use schedule::schedule;
