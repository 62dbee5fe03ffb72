//! Conformance testing harness for tinylibc.
//!
//! This crate provides:
//! - Fixture capture: record host libc behavior as JSON reference data
//! - Fixture verify: compare our implementation against captured fixtures
//! - Report generation: human-readable + machine-readable conformance reports
//! - Structured logging: JSONL records for CI consumption

#![forbid(unsafe_code)]

pub mod capture;
pub mod diff;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

use std::path::PathBuf;

use thiserror::Error;

pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::VerificationResult;

/// Top-level harness failure.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("fixture json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("fixture execution error: {0}")]
    Exec(#[from] tinylibc_conformance::ExecError),
    #[error("unknown fixture family `{0}`")]
    UnknownFamily(String),
    #[error("no fixture files found under {}", .0.display())]
    NoFixtures(PathBuf),
}
