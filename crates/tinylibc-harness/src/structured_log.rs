//! Structured logging contract for harness workflows.
//!
//! Provides:
//! - [`LogEntry`]: canonical JSONL log record with required + optional fields.
//! - [`LogEmitter`]: writes JSONL lines to any writer.
//! - [`validate_log_line`]: validates a single JSONL line against the schema.

use std::io::Write;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Test/verification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    Error,
}

/// Canonical structured log entry.
///
/// Required fields: `timestamp`, `trace_id`, `level`, `event`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub trace_id: String,
    pub level: LogLevel,
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Schema violation in a JSONL log line.
#[derive(Debug, Error)]
pub enum LogSchemaError {
    #[error("line is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("required field `{0}` is empty")]
    EmptyField(&'static str),
}

/// Writes [`LogEntry`] records as JSONL.
pub struct LogEmitter<W: Write> {
    out: W,
}

impl<W: Write> LogEmitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Emit one entry as a single JSONL line.
    pub fn emit(&mut self, entry: &LogEntry) -> std::io::Result<()> {
        let line = serde_json::to_string(entry).map_err(std::io::Error::other)?;
        writeln!(self.out, "{line}")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Validates a single JSONL line against the [`LogEntry`] schema.
pub fn validate_log_line(line: &str) -> Result<LogEntry, LogSchemaError> {
    let entry: LogEntry = serde_json::from_str(line)?;
    if entry.timestamp.is_empty() {
        return Err(LogSchemaError::EmptyField("timestamp"));
    }
    if entry.trace_id.is_empty() {
        return Err(LogSchemaError::EmptyField("trace_id"));
    }
    if entry.event.is_empty() {
        return Err(LogSchemaError::EmptyField("event"));
    }
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(outcome: Option<Outcome>) -> LogEntry {
        LogEntry {
            timestamp: "0".to_string(),
            trace_id: "verify-1".to_string(),
            level: LogLevel::Info,
            event: "case_verified".to_string(),
            case: Some("memchr_found".to_string()),
            outcome,
            detail: None,
        }
    }

    #[test]
    fn emitted_lines_validate() {
        let mut emitter = LogEmitter::new(Vec::new());
        emitter.emit(&entry(Some(Outcome::Pass))).expect("emit");
        emitter.emit(&entry(Some(Outcome::Fail))).expect("emit");
        let buf = emitter.into_inner();
        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            validate_log_line(line).expect("schema-valid line");
        }
    }

    #[test]
    fn optional_fields_are_omitted() {
        let mut emitter = LogEmitter::new(Vec::new());
        let mut e = entry(None);
        e.case = None;
        emitter.emit(&e).expect("emit");
        let text = String::from_utf8(emitter.into_inner()).expect("utf8");
        assert!(!text.contains("\"outcome\""));
        assert!(!text.contains("\"case\""));
    }

    #[test]
    fn empty_event_is_rejected() {
        let err = validate_log_line(
            r#"{"timestamp":"0","trace_id":"t","level":"info","event":""}"#,
        )
        .unwrap_err();
        assert!(matches!(err, LogSchemaError::EmptyField("event")));
    }

    #[test]
    fn non_json_is_rejected() {
        assert!(validate_log_line("not json").is_err());
    }
}
