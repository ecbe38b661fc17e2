//! Console output formatter for experiment reports

use crate::output::formatter::OutputFormatter;
use canvass_application::{ExperimentReport, RunReport};
use canvass_domain::{ExperimentSummary, RunStatus, SummaryStats};
use colored::Colorize;

/// Formats experiment reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Per-run lines followed by the summary
    pub fn format(report: &ExperimentReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Canvassing Runs"));
        output.push('\n');
        for run in &report.runs {
            output.push_str(&Self::run_line(run));
            output.push('\n');
        }

        output.push_str(&Self::summary_body(&report.summary));
        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(report: &ExperimentReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Aggregate summary only
    pub fn format_summary(report: &ExperimentReport) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Experiment Summary"));
        output.push('\n');
        output.push_str(&Self::summary_body(&report.summary));
        output.push_str(&Self::footer());
        output
    }

    fn run_line(run: &RunReport) -> String {
        let voter = format!(
            "{} ({})",
            run.profile.name(),
            run.profile.affiliation().as_str()
        );
        let detail = match &run.status {
            RunStatus::Completed(result) => format!(
                "{}  {} -> {}  turns {}  replies {}  {:.1}s{}",
                "completed".green(),
                result.prior,
                result.final_likelihood,
                result.turns_completed,
                result.num_replies,
                result.duration.as_secs_f64(),
                if result.mark_withdrew {
                    format!("  {}", "withdrew".yellow())
                } else {
                    String::new()
                }
            ),
            RunStatus::Aborted { party, stage } => {
                format!("{}  {} silent at {}", "aborted".yellow(), party, stage)
            }
            RunStatus::Failed { error } => format!("{}  {}", "failed".red(), error),
        };
        format!("{:>4}  {:<32} {}", run.index + 1, voter, detail)
    }

    fn summary_body(summary: &ExperimentSummary) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Runs"));
        output.push_str(&format!(
            "  {} completed, {} aborted, {} failed ({} total)\n",
            summary.completed_runs.to_string().green(),
            summary.aborted_runs.to_string().yellow(),
            summary.failed_runs.to_string().red(),
            summary.total_runs()
        ));

        output.push_str(&Self::section_header("Vote Likelihood"));
        output.push_str(&format!(
            "  {:<16} {:>8} {:>8} {:>8}\n",
            "", "prior", "final", "shift"
        ));
        output.push_str(&Self::likelihood_row(
            "Democrat vote",
            summary.prior_mean_target_vote_likelihood,
            summary.mean_target_vote_likelihood,
            summary.mean_target_shift,
        ));
        output.push_str(&Self::likelihood_row(
            "Turnout",
            summary.prior_mean_vote_likelihood,
            summary.mean_vote_likelihood,
            summary.mean_vote_shift,
        ));

        output.push_str(&Self::section_header("Calls"));
        output.push_str(&Self::stats_row("Replies", summary.replies.as_ref(), ""));
        output.push_str(&Self::stats_row(
            "Duration",
            summary.duration_sec.as_ref(),
            "s",
        ));
        output.push_str(&format!(
            "  {:<16} {}\n",
            "Withdrawals", summary.mark_withdraw_count
        ));

        output.push_str(&Self::section_header("Rule Violations (runs)"));
        output.push_str(&format!(
            "  {:<16} {:>10} {:>10}\n",
            "", "canvasser", "voter"
        ));
        output.push_str(&format!(
            "  {:<16} {:>10} {:>10}\n",
            "Broke character",
            summary.canvasser_broke_character_runs,
            summary.mark_broke_character_runs
        ));
        output.push_str(&format!(
            "  {:<16} {:>10} {:>10}\n",
            "Empty [OPEN]", summary.canvasser_empty_tags_runs, summary.mark_empty_tags_runs
        ));

        output
    }

    fn likelihood_row(
        label: &str,
        prior: Option<f64>,
        last: Option<f64>,
        shift: Option<f64>,
    ) -> String {
        let shift = match shift {
            Some(s) if s > 0.0 => format!("{:+.1}", s).green().to_string(),
            Some(s) if s < 0.0 => format!("{:+.1}", s).red().to_string(),
            Some(s) => format!("{:+.1}", s),
            None => "n/a".dimmed().to_string(),
        };
        format!(
            "  {:<16} {:>8} {:>8} {:>8}\n",
            label,
            Self::percent(prior),
            Self::percent(last),
            shift
        )
    }

    fn stats_row(label: &str, stats: Option<&SummaryStats>, unit: &str) -> String {
        match stats {
            Some(s) => format!(
                "  {:<16} mean {:.1}{unit}  median {:.1}{unit}  min {:.1}{unit}  max {:.1}{unit}  total {:.1}{unit}\n",
                label, s.mean, s.median, s.min, s.max, s.sum
            ),
            None => format!("  {:<16} {}\n", label, "n/a".dimmed()),
        }
    }

    fn percent(value: Option<f64>) -> String {
        value
            .map(|v| format!("{:.1}%", v))
            .unwrap_or_else(|| "n/a".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &ExperimentReport) -> String {
        Self::format(report)
    }

    fn format_json(&self, report: &ExperimentReport) -> String {
        Self::format_json(report)
    }

    fn format_summary(&self, report: &ExperimentReport) -> String {
        Self::format_summary(report)
    }
}
