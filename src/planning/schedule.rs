//! Schedule generation - draft tasks to time-stamped plan entries
//!
//! A direct per-item map: each draft is placed at its preferred time and
//! ends `estimated_duration` minutes later. There is no overlap detection
//! and no reordering by computed time; any intelligent ordering happened
//! upstream before ingestion, and the output keeps the input order.

use tracing::debug;

use crate::domain::{ScheduledTask, Task};

/// Schedule every draft independently, preserving input order
pub fn schedule(drafts: &[Task]) -> Vec<ScheduledTask> {
    debug!(count = drafts.len(), "schedule: placing drafts");
    drafts.iter().map(place).collect()
}

/// Place one draft on the clock
///
/// Start is the preferred time as-is; end is start plus the estimated
/// duration, with the hour left unwrapped past midnight. An empty
/// description is backfilled from the title.
fn place(task: &Task) -> ScheduledTask {
    let start_time = task.preferred_time;
    let end_time = start_time.add_minutes(task.estimated_duration);

    let description = if task.description.is_empty() {
        task.title.clone()
    } else {
        task.description.clone()
    };

    ScheduledTask {
        id: task.id.clone(),
        title: task.title.clone(),
        description,
        priority: task.priority,
        estimated_duration: task.estimated_duration,
        preferred_time: task.preferred_time,
        start_time,
        end_time,
        is_completed: false,
    }
}
