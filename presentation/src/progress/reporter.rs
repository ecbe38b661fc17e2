//! Progress reporting for experiment execution

use canvass_application::ProgressNotifier;
use canvass_domain::{ExperimentSummary, Party, RunStatus, VoterProfile};
use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress during an experiment with a progress bar over runs
pub struct ProgressReporter {
    multi: MultiProgress,
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bar: Mutex::new(None),
        }
    }

    fn run_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }

    fn status_mark(status: &RunStatus) -> String {
        match status {
            RunStatus::Completed(_) => "v".green().to_string(),
            RunStatus::Aborted { .. } => "-".yellow().to_string(),
            RunStatus::Failed { .. } => "x".red().to_string(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_experiment_start(&self, total_runs: usize) {
        let pb = self.multi.add(ProgressBar::new(total_runs as u64));
        pb.set_style(Self::run_style());
        pb.set_prefix("Canvassing");
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_run_start(&self, index: usize, profile: &VoterProfile) {
        self.with_bar(|pb| {
            pb.set_message(format!(
                "run {}: {} ({})",
                index + 1,
                profile.name(),
                profile.affiliation().as_str()
            ))
        });
    }

    fn on_turn(&self, party: Party, turn: usize) {
        self.with_bar(|pb| {
            pb.tick();
            if party == Party::Mark {
                pb.set_message(format!("turn {} done", turn));
            }
        });
    }

    fn on_run_complete(&self, index: usize, status: &RunStatus) {
        self.with_bar(|pb| {
            pb.set_message(format!("{} run {}", Self::status_mark(status), index + 1));
            pb.inc(1);
        });
    }

    fn on_experiment_complete(&self, summary: &ExperimentSummary) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(format!(
                "{} ({} completed)",
                "done".green(),
                summary.completed_runs
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_experiment_start(&self, total_runs: usize) {
        eprintln!("{} {} ({} runs)", "->".cyan(), "Canvassing".bold(), total_runs);
    }

    fn on_run_complete(&self, index: usize, status: &RunStatus) {
        eprintln!(
            "  {} run {} {}",
            ProgressReporter::status_mark(status),
            index + 1,
            status.label()
        );
    }

    fn on_experiment_complete(&self, _summary: &ExperimentSummary) {
        eprintln!();
    }
}
