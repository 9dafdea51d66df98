use std::fmt::Write;

use crate::checker::{Finding, Severity};
use crate::error::Result;
use crate::report::ValidationReport;

use super::ReportFormatter;

/// Renders the report as a human-readable Markdown document: header with the
/// echoed message identity, a summary section, and one section per finding.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    const fn status_icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Pass => "✅",
            Severity::Warn => "⚠️",
            Severity::Fail => "❌",
        }
    }

    fn write_finding(out: &mut String, finding: &Finding) {
        let _ = writeln!(
            out,
            "### {} [{}] {}",
            Self::status_icon(finding.severity),
            finding.severity.as_str(),
            finding.check_id
        );
        let _ = writeln!(out, "- {}", finding.message);
        if let Some(details) = &finding.details {
            let _ = writeln!(out, "- Details:");
            for (key, value) in details {
                let _ = writeln!(out, "  - `{key}`: {value}");
            }
        }
        let _ = writeln!(out);
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "# Conjunction Data Validation Report");
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "- **Report time (UTC):** {}",
            report.report_time_utc.to_rfc3339()
        );
        let _ = writeln!(out, "- **Message ID:** {}", report.message_id);
        let _ = writeln!(
            out,
            "- **Creation time (UTC):** {}",
            report.creation_time_utc.to_rfc3339()
        );
        let _ = writeln!(out, "- **TCA (UTC):** {}", report.tca_utc.to_rfc3339());
        let _ = writeln!(out);
        let _ = writeln!(out, "## Summary");
        let _ = writeln!(out, "- PASS: {}", report.summary.pass);
        let _ = writeln!(out, "- WARN: {}", report.summary.warn);
        let _ = writeln!(out, "- FAIL: {}", report.summary.fail);
        let _ = writeln!(out, "- **OK:** {}", report.ok);
        let _ = writeln!(out);
        let _ = writeln!(out, "## Findings");
        for finding in &report.findings {
            Self::write_finding(&mut out, finding);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
