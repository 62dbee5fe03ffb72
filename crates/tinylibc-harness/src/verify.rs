//! Verification results.

use serde::{Deserialize, Serialize};

/// Outcome of replaying one fixture case against the implementation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Case identifier.
    pub case_name: String,
    /// POSIX/C standard section reference.
    pub spec_section: String,
    /// Whether the implementation matched the expected output.
    pub passed: bool,
    /// Expected output from the fixture.
    pub expected: String,
    /// Output actually produced.
    pub actual: String,
    /// Rendered diff or divergence note, when there is something to show.
    pub diff: Option<String>,
}

/// Pass/fail totals over a result list.
#[must_use]
pub fn summarize(results: &[VerificationResult]) -> (usize, usize) {
    let passed = results.iter().filter(|r| r.passed).count();
    (passed, results.len() - passed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(passed: bool) -> VerificationResult {
        VerificationResult {
            case_name: "case".to_string(),
            spec_section: "C17".to_string(),
            passed,
            expected: "1".to_string(),
            actual: if passed { "1" } else { "0" }.to_string(),
            diff: None,
        }
    }

    #[test]
    fn summarize_counts_both_sides() {
        let results = vec![result(true), result(false), result(true)];
        assert_eq!(summarize(&results), (2, 1));
    }
}
