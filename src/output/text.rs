use std::fmt::Write;

use crate::checker::Severity;
use crate::error::Result;
use crate::report::ValidationReport;

use super::ReportFormatter;

/// Compact terminal output: one line per WARN/FAIL finding plus a summary.
/// PASS findings are only shown in verbose mode; they are always counted in
/// the summary.
pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { verbose: false }
    }

    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    const fn status_icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Pass => "✓",
            Severity::Warn => "⚠",
            Severity::Fail => "✗",
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "Message: {} (TCA {})", report.message_id, report.tca_utc.to_rfc3339());
        let _ = writeln!(out);

        for finding in &report.findings {
            if !self.verbose && finding.is_pass() {
                continue;
            }
            let _ = writeln!(
                out,
                "{} [{}] {}: {}",
                Self::status_icon(finding.severity),
                finding.severity.as_str(),
                finding.check_id,
                finding.message
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Summary: {} passed, {} warnings, {} failed",
            report.summary.pass, report.summary.warn, report.summary.fail
        );
        let _ = writeln!(out, "Result: {}", if report.ok { "OK" } else { "NOT OK" });
        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
