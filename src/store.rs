//! PlannerStore - owner of the working set and the saved plan
//!
//! The store is the only mutation surface for both collections. Operations
//! on unknown ids are silent no-ops: ids originate from the store itself,
//! so a stale id means the display layer raced a deletion and the store
//! tolerates it rather than erroring.
//!
//! All operations are synchronous and run to completion on the caller's
//! turn; the store is owned by a single call site and needs no locking.

use tracing::debug;

use crate::domain::{ScheduledTask, Task, TaskPatch};
use crate::planning;

/// In-memory task store: draft working set plus finalized saved plan
///
/// The two collections are independent. Editing a draft never touches the
/// saved plan; regenerating the plan replaces it wholesale and never feeds
/// back into the drafts.
#[derive(Debug, Default)]
pub struct PlannerStore {
    drafts: Vec<Task>,
    plan: Vec<ScheduledTask>,
}

impl PlannerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The draft working set, in insertion order
    pub fn drafts(&self) -> &[Task] {
        &self.drafts
    }

    /// The saved plan from the last [`generate_plan`](Self::generate_plan) call
    pub fn plan(&self) -> &[ScheduledTask] {
        &self.plan
    }

    /// Append one empty draft with the manual-creation defaults
    pub fn add_draft(&mut self) -> &Task {
        let task = Task::manual_draft();
        debug!(id = %task.id, "add_draft: appending draft");
        self.drafts.push(task);
        &self.drafts[self.drafts.len() - 1]
    }

    /// Merge a partial update into the matching draft
    ///
    /// No-op for unknown ids. The id itself can never change.
    pub fn update_draft(&mut self, id: &str, patch: TaskPatch) {
        match self.drafts.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                debug!(%id, "update_draft: applying patch");
                task.apply(patch);
            }
            None => {
                debug!(%id, "update_draft: unknown id, ignoring");
            }
        }
    }

    /// Remove the matching draft; no-op for unknown ids
    pub fn delete_draft(&mut self, id: &str) {
        let before = self.drafts.len();
        self.drafts.retain(|t| t.id != id);
        if self.drafts.len() == before {
            debug!(%id, "delete_draft: unknown id, ignoring");
        } else {
            debug!(%id, "delete_draft: removed");
        }
    }

    /// Replace the entire working set with the given tasks
    ///
    /// Used when the AI bridge supplies a full plan. Overwrites, never
    /// merges; the previous drafts are discarded.
    pub fn ingest_tasks(&mut self, tasks: Vec<Task>) {
        debug!(
            incoming = tasks.len(),
            replaced = self.drafts.len(),
            "ingest_tasks: replacing working set"
        );
        self.drafts = tasks;
    }

    /// Run the plan generator over the working set
    ///
    /// The result becomes the new saved plan, fully replacing the previous
    /// one. Output order matches the working-set order.
    pub fn generate_plan(&mut self) -> &[ScheduledTask] {
        debug!(drafts = self.drafts.len(), "generate_plan: scheduling working set");
        self.plan = planning::schedule(&self.drafts);
        &self.plan
    }

    /// Flip the completion flag on the matching saved-plan task
    ///
    /// No-op for unknown ids; never touches the working set.
    pub fn toggle_complete(&mut self, id: &str) {
        match self.plan.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.toggle_complete();
                debug!(%id, is_completed = task.is_completed, "toggle_complete: flipped");
            }
            None => {
                debug!(%id, "toggle_complete: unknown id, ignoring");
            }
        }
    }
}
