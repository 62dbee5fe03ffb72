//! Conformance report generation.

use serde::{Deserialize, Serialize};

use crate::verify::{VerificationResult, summarize};

/// Machine-readable conformance report, also renderable as markdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub campaign: String,
    pub generated_at: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<VerificationResult>,
}

impl ConformanceReport {
    #[must_use]
    pub fn new(
        campaign: impl Into<String>,
        generated_at: impl Into<String>,
        results: Vec<VerificationResult>,
    ) -> Self {
        let (passed, failed) = summarize(&results);
        Self {
            campaign: campaign.into(),
            generated_at: generated_at.into(),
            total: results.len(),
            passed,
            failed,
            results,
        }
    }

    /// Serialize the report to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# Conformance report: {}\n\n", self.campaign));
        out.push_str(&format!("Generated at: {}\n\n", self.generated_at));
        out.push_str(&format!(
            "**{} passed, {} failed, {} total**\n\n",
            self.passed, self.failed, self.total
        ));
        out.push_str("| case | reference | result |\n");
        out.push_str("|------|-----------|--------|\n");
        for result in &self.results {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                result.case_name,
                result.spec_section,
                if result.passed { "pass" } else { "FAIL" }
            ));
        }
        let failures: Vec<&VerificationResult> =
            self.results.iter().filter(|r| !r.passed).collect();
        if !failures.is_empty() {
            out.push_str("\n## Failures\n");
            for result in failures {
                out.push_str(&format!("\n### {}\n\n```\n", result.case_name));
                if let Some(diff) = &result.diff {
                    out.push_str(diff);
                }
                out.push_str("```\n");
            }
        }
        out
    }
}
