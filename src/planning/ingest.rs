//! AI response ingestion - pulling a task list out of free-form model text
//!
//! The model replies with prose that should contain a single JSON array of
//! task-like objects. Extraction runs in two stages so the two failure
//! modes stay independently testable: first a bare bracketed-array scan,
//! then a fenced-code-block fallback, each yielding a tagged result; the
//! candidate text then goes through a strict JSON-array decode.
//!
//! Ingestion is all-or-nothing by construction: parsing happens before the
//! store is touched, so a failure leaves the working set unchanged.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{Priority, Task, TimeOfDay, batch_id, defaults, now_ms};

/// Failure to turn an AI response into a task list
///
/// Surfaced to the caller, never retried here; the display layer is
/// expected to offer a retry affordance.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no valid JSON found in AI response")]
    NoJsonFound,

    #[error("malformed AI task list: {0}")]
    MalformedTaskList(String),
}

/// Result of the extraction stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction<'a> {
    /// Candidate array text located in the response
    Found(&'a str),
    /// Neither a bracketed array nor a fenced block present
    NotFound,
}

/// One element of the model's task array, before defaulting
///
/// Every field is optional; the wire names are the camelCase keys the
/// prompt asks the model to emit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiTaskEntry {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub estimated_duration: Option<u32>,
    pub preferred_time: Option<String>,
}

static BARE_ARRAY_RE: OnceLock<Regex> = OnceLock::new();
static FENCED_BLOCK_RE: OnceLock<Regex> = OnceLock::new();

fn bare_array_re() -> &'static Regex {
    // Greedy: first '[' through the last ']' in the response
    BARE_ARRAY_RE.get_or_init(|| Regex::new(r"(?s)\[.*\]").unwrap())
}

fn fenced_block_re() -> &'static Regex {
    FENCED_BLOCK_RE.get_or_init(|| Regex::new(r"(?s)```(?:json)?\s*(.*?)\s*```").unwrap())
}

/// Locate the candidate array text in a model response
///
/// Primary scan takes the largest bracketed span; the fenced-block scan is
/// only consulted when no bracket pair exists at all.
pub fn extract_json_array(text: &str) -> Extraction<'_> {
    if let Some(m) = bare_array_re().find(text) {
        debug!(start = m.start(), len = m.len(), "extract_json_array: bare array span");
        return Extraction::Found(m.as_str());
    }

    if let Some(caps) = fenced_block_re().captures(text)
        && let Some(inner) = caps.get(1)
    {
        debug!(len = inner.len(), "extract_json_array: fenced block fallback");
        return Extraction::Found(inner.as_str());
    }

    debug!("extract_json_array: nothing found");
    Extraction::NotFound
}

/// Decode the response into raw task entries
pub fn parse_task_list(text: &str) -> Result<Vec<AiTaskEntry>, ParseError> {
    let candidate = match extract_json_array(text) {
        Extraction::Found(c) => c,
        Extraction::NotFound => return Err(ParseError::NoJsonFound),
    };

    let value: serde_json::Value =
        serde_json::from_str(candidate).map_err(|e| ParseError::MalformedTaskList(e.to_string()))?;

    if !value.is_array() {
        return Err(ParseError::MalformedTaskList("expected a JSON array".to_string()));
    }

    serde_json::from_value(value).map_err(|e| ParseError::MalformedTaskList(e.to_string()))
}

/// Parse a model response into draft tasks with batch-unique ids
pub fn tasks_from_response(text: &str) -> Result<Vec<Task>, ParseError> {
    let entries = parse_task_list(text)?;
    let stamp = now_ms();

    let tasks = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| task_from_entry(entry, batch_id(stamp, index)))
        .collect::<Vec<_>>();

    debug!(count = tasks.len(), "tasks_from_response: parsed task list");
    Ok(tasks)
}

/// Map one entry into a draft using the AI-sourced defaulting column
///
/// A priority or time string the model mangled falls back to the default
/// for that field rather than failing the batch.
fn task_from_entry(entry: AiTaskEntry, id: String) -> Task {
    let priority = match entry.priority.as_deref() {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(priority = raw, "task_from_entry: unrecognized priority, using default");
            Priority::default()
        }),
        None => Priority::default(),
    };

    let preferred_time = match entry.preferred_time.as_deref() {
        Some(raw) => TimeOfDay::parse(raw).unwrap_or_else(|_| {
            warn!(time = raw, "task_from_entry: unparseable preferred time, using default");
            defaults::AI_PREFERRED_TIME
        }),
        None => defaults::AI_PREFERRED_TIME,
    };

    Task {
        id,
        title: entry.title.unwrap_or_default(),
        description: entry.description.unwrap_or_default(),
        priority,
        estimated_duration: entry.estimated_duration.unwrap_or(defaults::AI_DURATION_MINS),
        preferred_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bare_array() {
        let text = "Sure! [{\"title\":\"Fajr\"}] Let me know.";
        assert_eq!(extract_json_array(text), Extraction::Found("[{\"title\":\"Fajr\"}]"));
    }

    #[test]
    fn test_extract_greedy_spans_first_to_last_bracket() {
        // The scan keeps the original scraper's behavior: one greedy span,
        // even when it swallows unrelated bracketed text.
        let text = "[1] middle [2]";
        assert_eq!(extract_json_array(text), Extraction::Found("[1] middle [2]"));
    }

    #[test]
    fn test_extract_fenced_block_fallback() {
        let text = "Here is the plan:\n```json\n{\"not\": \"an array\"}\n```";
        assert_eq!(
            extract_json_array(text),
            Extraction::Found("{\"not\": \"an array\"}")
        );
    }

    #[test]
    fn test_extract_nothing() {
        assert_eq!(extract_json_array("I could not produce a plan."), Extraction::NotFound);
    }

    #[test]
    fn test_parse_fenced_json_array() {
        let text = "Here you go:\n```json\n[{\"title\":\"Fajr\"}]\n```";
        let entries = parse_task_list(text).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title.as_deref(), Some("Fajr"));
    }

    #[test]
    fn test_parse_no_json_fails() {
        assert_eq!(
            parse_task_list("No brackets and no fences here."),
            Err(ParseError::NoJsonFound)
        );
    }

    #[test]
    fn test_parse_invalid_json_is_malformed() {
        let err = parse_task_list("[{\"title\": }]").unwrap_err();
        assert!(matches!(err, ParseError::MalformedTaskList(_)));
    }

    #[test]
    fn test_parse_non_array_is_malformed() {
        // Fenced fallback hands back an object; the decode stage rejects it
        let err = parse_task_list("```json\n{\"title\":\"Fajr\"}\n```").unwrap_err();
        assert!(matches!(err, ParseError::MalformedTaskList(_)));
    }

    #[test]
    fn test_greedy_span_over_two_arrays_is_malformed() {
        let err = parse_task_list("[1] and also [2]").unwrap_err();
        assert!(matches!(err, ParseError::MalformedTaskList(_)));
    }

    #[test]
    fn test_tasks_get_ai_defaults() {
        let tasks = tasks_from_response("```json\n[{\"title\":\"Fajr\"}]\n```").unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Fajr");
        assert_eq!(tasks[0].priority, Priority::Medium);
        assert_eq!(tasks[0].estimated_duration, 30);
        assert_eq!(tasks[0].preferred_time, TimeOfDay::new(9, 0));
    }

    #[test]
    fn test_tasks_keep_supplied_fields() {
        let text = r#"[{
            "title": "Quran reading",
            "description": "Two pages after Maghrib",
            "priority": "high",
            "estimatedDuration": 20,
            "preferredTime": "19:30"
        }]"#;

        let tasks = tasks_from_response(text).unwrap();
        assert_eq!(tasks[0].title, "Quran reading");
        assert_eq!(tasks[0].description, "Two pages after Maghrib");
        assert_eq!(tasks[0].priority, Priority::High);
        assert_eq!(tasks[0].estimated_duration, 20);
        assert_eq!(tasks[0].preferred_time, TimeOfDay::new(19, 30));
    }

    #[test]
    fn test_mangled_priority_and_time_fall_back_to_defaults() {
        let text = r#"[{"title":"Walk","priority":"soon","preferredTime":"after lunch"}]"#;

        let tasks = tasks_from_response(text).unwrap();
        assert_eq!(tasks[0].priority, Priority::Medium);
        assert_eq!(tasks[0].preferred_time, TimeOfDay::new(9, 0));
    }

    #[test]
    fn test_batch_ids_are_unique_and_ordered() {
        let text = r#"[{"title":"A"},{"title":"B"},{"title":"C"}]"#;
        let tasks = tasks_from_response(text).unwrap();

        assert_eq!(tasks.len(), 3);
        assert!(tasks[0].id.ends_with("-0"));
        assert!(tasks[1].id.ends_with("-1"));
        assert!(tasks[2].id.ends_with("-2"));

        let mut ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_structurally_wrong_element_fails_whole_batch() {
        let err = tasks_from_response(r#"[{"title":"ok"}, "just a string"]"#).unwrap_err();
        assert!(matches!(err, ParseError::MalformedTaskList(_)));
    }
}
