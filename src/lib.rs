//! dayplanner - task store, schedule generator, and AI bridge for HerDeen
//!
//! This crate is the planning core behind HerDeen's AI day planner. The
//! display layer, navigation, and persistence are external collaborators;
//! what lives here is the in-memory task model and the logic that turns a
//! conversation with an LLM into a scheduled day.
//!
//! # Core Concepts
//!
//! - **Two collections**: a draft working set and a finalized saved plan,
//!   owned by [`PlannerStore`]; regenerating the plan replaces it wholesale
//! - **Pure scheduling**: each draft is placed at its preferred time and
//!   ends after its estimated duration - no overlap detection, input order
//!   preserved
//! - **Stateless bridge**: conversation history is caller-owned and passed
//!   into every LLM call
//! - **All-or-nothing ingestion**: a response that fails to parse leaves
//!   the working set untouched
//!
//! # Modules
//!
//! - [`domain`] - Task, ScheduledTask, Priority, TimeOfDay
//! - [`store`] - the working set / saved plan owner and its operations
//! - [`planning`] - schedule generation, response ingestion, assistant
//! - [`llm`] - LLM client trait and gateway implementation
//! - [`config`] - configuration types and loading

pub mod config;
pub mod domain;
pub mod llm;
pub mod planning;
pub mod store;

// Re-export commonly used types
pub use config::{Config, LlmConfig};
pub use domain::{Priority, ScheduledTask, Task, TaskPatch, TimeOfDay};
pub use llm::{ChatMessage, ChatRequest, ChatResponse, LlmClient, LlmError, OpenRouterClient, Role, create_client};
pub use planning::{AssistantConfig, AssistantError, ParseError, PlannerAssistant, schedule, tasks_from_response};
pub use store::PlannerStore;
