//! Task domain types
//!
//! A [`Task`] is a draft in the working set: created empty by the user or
//! ingested from an AI response, then edited in place. A [`ScheduledTask`]
//! is what the plan generator produces from a draft; only scheduled tasks
//! carry start/end times and a completion flag, so the "drafts are never
//! time-stamped" rule holds by construction.

use serde::{Deserialize, Serialize};

use super::id::draft_id;
use super::priority::Priority;
use super::time::TimeOfDay;

/// Field defaults for the two task creation paths
///
/// Both call sites (manual creation, AI ingestion) read this table; the
/// columns differ on purpose and must not drift apart.
///
/// | field              | manual draft | AI-sourced |
/// |--------------------|--------------|------------|
/// | priority           | medium       | medium     |
/// | estimated_duration | 40           | 30         |
/// | preferred_time     | 01:50        | 09:00      |
pub mod defaults {
    use crate::domain::time::TimeOfDay;

    /// Estimated duration of a manually created draft, in minutes
    pub const MANUAL_DURATION_MINS: u32 = 40;

    /// Preferred start of a manually created draft
    pub const MANUAL_PREFERRED_TIME: TimeOfDay = TimeOfDay::new(1, 50);

    /// Estimated duration when an AI entry omits the field, in minutes
    pub const AI_DURATION_MINS: u32 = 30;

    /// Preferred start when an AI entry omits or mangles the field
    pub const AI_PREFERRED_TIME: TimeOfDay = TimeOfDay::new(9, 0);
}

/// A draft task in the working set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier, stable for the task's lifetime
    pub id: String,

    /// Short label; empty for a freshly created draft
    pub title: String,

    /// Optional elaboration; empty means absent
    #[serde(default)]
    pub description: String,

    /// Scheduling priority
    pub priority: Priority,

    /// Estimated duration in minutes
    pub estimated_duration: u32,

    /// Target start time of day
    pub preferred_time: TimeOfDay,
}

impl Task {
    /// Create an empty draft with the manual-creation defaults
    pub fn manual_draft() -> Self {
        Self {
            id: draft_id(),
            title: String::new(),
            description: String::new(),
            priority: Priority::default(),
            estimated_duration: defaults::MANUAL_DURATION_MINS,
            preferred_time: defaults::MANUAL_PREFERRED_TIME,
        }
    }

    /// Merge a partial update into this task
    ///
    /// Supplied fields overwrite, omitted fields keep their value. The id
    /// is not part of the patch and can never change.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(estimated_duration) = patch.estimated_duration {
            self.estimated_duration = estimated_duration;
        }
        if let Some(preferred_time) = patch.preferred_time {
            self.preferred_time = preferred_time;
        }
    }
}

/// Partial update for a draft task; `None` keeps the current value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub estimated_duration: Option<u32>,
    pub preferred_time: Option<TimeOfDay>,
}

/// A task placed on the saved plan by the plan generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Id carried over from the draft
    pub id: String,

    /// Label carried over from the draft
    pub title: String,

    /// Draft description, backfilled from the title when empty
    pub description: String,

    /// Scheduling priority
    pub priority: Priority,

    /// Estimated duration in minutes
    pub estimated_duration: u32,

    /// Target start time the schedule was derived from
    pub preferred_time: TimeOfDay,

    /// Scheduled start (the preferred time, reformatted)
    pub start_time: TimeOfDay,

    /// Scheduled end; may run past 23:59 without wrapping
    pub end_time: TimeOfDay,

    /// Completion flag, flipped by the store's toggle operation
    #[serde(default)]
    pub is_completed: bool,
}

impl ScheduledTask {
    /// Flip the completion flag
    pub fn toggle_complete(&mut self) {
        self.is_completed = !self.is_completed;
    }
}
