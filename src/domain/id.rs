//! Task id generation
//!
//! Ids are opaque strings, unique for the lifetime of a task and never
//! reused. Manually created drafts get a UUIDv7 (timestamp ordered); tasks
//! ingested from an AI response get `"{creation_ms}-{index}"` ids, unique
//! within the batch. An ingested batch replaces the working set wholesale,
//! so the two schemes cannot collide inside one collection.

/// Current Unix time in milliseconds
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate an opaque id for a manually created draft task
pub fn draft_id() -> String {
    uuid::Uuid::now_v7().simple().to_string()
}

/// Generate an id for one entry of an ingested batch
pub fn batch_id(stamp_ms: i64, index: usize) -> String {
    format!("{}-{}", stamp_ms, index)
}
