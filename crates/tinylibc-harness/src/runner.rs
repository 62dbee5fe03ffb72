//! Test execution engine.

use crate::diff;
use crate::fixtures::FixtureSet;
use crate::verify::VerificationResult;
use tinylibc_conformance::execute_fixture_case;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| {
                let (actual, diff) = match execute_fixture_case(&case.function, &case.inputs) {
                    Ok(run) => {
                        let mut notes = Vec::new();
                        if !run.host_parity {
                            notes.push(format!(
                                "host parity mismatch: host={}, impl={}",
                                run.host_output, run.impl_output
                            ));
                        }
                        if let Some(note) = run.note.clone() {
                            notes.push(note);
                        }

                        let diff_out = if run.impl_output != case.expected_output {
                            Some(diff::render_diff(&case.expected_output, &run.impl_output))
                        } else if notes.is_empty() {
                            None
                        } else {
                            Some(notes.join("\n"))
                        };
                        (run.impl_output, diff_out)
                    }
                    Err(err) => {
                        let actual = format!("unsupported:{err}");
                        let diff_out = Some(diff::render_diff(&case.expected_output, &actual));
                        (actual, diff_out)
                    }
                };
                VerificationResult {
                    case_name: case.name.clone(),
                    spec_section: case.spec_section.clone(),
                    passed: actual == case.expected_output,
                    expected: case.expected_output.clone(),
                    actual,
                    diff,
                }
            })
            .collect()
    }
}
