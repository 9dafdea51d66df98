use crate::error::Result;
use crate::report::ValidationReport;

use super::ReportFormatter;

/// Serializes the report as pretty-printed JSON. The report types already
/// derive `Serialize`, so this is a direct projection.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
