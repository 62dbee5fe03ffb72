//! CLI entrypoint for the tinylibc conformance harness.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};

use tinylibc_harness::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use tinylibc_harness::{ConformanceReport, FixtureSet, HarnessError, TestRunner, capture};

/// Conformance tooling for tinylibc.
#[derive(Debug, Parser)]
#[command(name = "tinylibc-harness")]
#[command(about = "Conformance testing harness for tinylibc")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Capture host libc behavior as fixture files.
    Capture {
        /// Output directory for fixture JSON files.
        #[arg(long)]
        output: PathBuf,
        /// Function family to capture ("string", "ctype", or "stdlib").
        #[arg(long)]
        family: String,
        /// Fixed timestamp string for deterministic fixture files.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Verify the implementation against captured fixtures.
    Verify {
        /// Fixture JSON file, or a directory of them.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Output JSONL structured log path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
}

fn now() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "0".to_string())
}

fn load_fixture_sets(path: &Path) -> Result<Vec<FixtureSet>, HarnessError> {
    if path.is_dir() {
        let mut files: Vec<PathBuf> = fs::read_dir(path)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();
        if files.is_empty() {
            return Err(HarnessError::NoFixtures(path.to_path_buf()));
        }
        files.iter().map(|p| FixtureSet::from_file(p)).collect()
    } else {
        Ok(vec![FixtureSet::from_file(path)?])
    }
}

fn run_capture(output: &Path, family: &str, timestamp: &str) -> Result<(), HarnessError> {
    let set = capture::capture_family(family, timestamp)?;
    fs::create_dir_all(output)?;
    let path = output.join(format!("{family}.{}.json", set.version));
    fs::write(&path, set.to_json()?)?;
    println!("captured {} cases to {}", set.cases.len(), path.display());
    Ok(())
}

fn run_verify(
    fixture: &Path,
    report_path: Option<&Path>,
    log_path: Option<&Path>,
    timestamp: &str,
) -> Result<usize, HarnessError> {
    let sets = load_fixture_sets(fixture)?;

    let mut results = Vec::new();
    for set in &sets {
        let runner = TestRunner::new(set.family.clone());
        results.extend(runner.run(set));
    }

    if let Some(path) = log_path {
        let mut emitter = LogEmitter::new(fs::File::create(path)?);
        let trace_id = format!("verify-{timestamp}");
        for result in &results {
            emitter.emit(&LogEntry {
                timestamp: timestamp.to_string(),
                trace_id: trace_id.clone(),
                level: if result.passed {
                    LogLevel::Info
                } else {
                    LogLevel::Error
                },
                event: "case_verified".to_string(),
                case: Some(result.case_name.clone()),
                outcome: Some(if result.passed {
                    Outcome::Pass
                } else {
                    Outcome::Fail
                }),
                detail: result.diff.clone(),
            })?;
        }
    }

    let report = ConformanceReport::new("verify", timestamp, results);
    match report_path {
        Some(path) => fs::write(path, report.to_markdown())?,
        None => println!(
            "{} passed, {} failed, {} total",
            report.passed, report.failed, report.total
        ),
    }

    for result in report.results.iter().filter(|r| !r.passed) {
        eprintln!("FAIL {}", result.case_name);
        if let Some(diff) = &result.diff {
            eprintln!("{diff}");
        }
    }

    Ok(report.failed)
}

fn run(cli: Cli) -> Result<usize, HarnessError> {
    match cli.command {
        Command::Capture {
            output,
            family,
            timestamp,
        } => {
            run_capture(&output, &family, &timestamp.unwrap_or_else(now))?;
            Ok(0)
        }
        Command::Verify {
            fixture,
            report,
            log,
            timestamp,
        } => run_verify(
            &fixture,
            report.as_deref(),
            log.as_deref(),
            &timestamp.unwrap_or_else(now),
        ),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
