//! Output formatter trait

use canvass_application::ExperimentReport;

/// Trait for formatting experiment reports
pub trait OutputFormatter {
    /// Per-run lines followed by the summary
    fn format(&self, report: &ExperimentReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &ExperimentReport) -> String;

    /// Aggregate summary only
    fn format_summary(&self, report: &ExperimentReport) -> String;
}
