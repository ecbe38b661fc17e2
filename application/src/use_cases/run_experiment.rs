//! Run Experiment use case.
//!
//! Runs a batch of independent calls, each with a freshly generated voter,
//! and reduces the per-run metrics into an [`ExperimentSummary`].
//!
//! Runs execute sequentially. A run that fails (transport error, answer
//! that cannot be extracted) is counted and the batch continues.

use crate::config::{CanvassSettings, ExperimentParams};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::metrics_recorder::MetricsRecorder;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::run_canvass::{RunCanvassInput, RunCanvassUseCase};
use canvass_domain::{
    ExperimentSummary, PriorDistribution, ProfileGenerator, RunMetrics, RunStatus, VoterProfile,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum RunExperimentError {
    #[error("Number of experiments must be at least 1")]
    ZeroExperiments,

    #[error("Turn cap must be at least 1")]
    InvalidTurnCap,
}

/// Input for the [`RunExperimentUseCase`].
#[derive(Debug, Clone, Default)]
pub struct RunExperimentInput {
    pub settings: CanvassSettings,
    pub params: ExperimentParams,
}

impl RunExperimentInput {
    pub fn new(settings: CanvassSettings, params: ExperimentParams) -> Self {
        Self { settings, params }
    }
}

/// One run of an experiment
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub index: usize,
    pub profile: VoterProfile,
    pub status: RunStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    pub runs: Vec<RunReport>,
    pub summary: ExperimentSummary,
}

pub struct RunExperimentUseCase<G: LlmGateway + 'static> {
    canvass: RunCanvassUseCase<G>,
    generator: ProfileGenerator,
    priors: PriorDistribution,
    recorder: Arc<dyn MetricsRecorder>,
}

impl<G: LlmGateway + 'static> RunExperimentUseCase<G> {
    pub fn new(canvass: RunCanvassUseCase<G>, recorder: Arc<dyn MetricsRecorder>) -> Self {
        Self {
            canvass,
            generator: ProfileGenerator::default(),
            priors: PriorDistribution::default(),
            recorder,
        }
    }

    pub async fn execute(
        &self,
        input: RunExperimentInput,
    ) -> Result<ExperimentReport, RunExperimentError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        input: RunExperimentInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<ExperimentReport, RunExperimentError> {
        let RunExperimentInput { settings, params } = input;
        if params.num_experiments == 0 {
            return Err(RunExperimentError::ZeroExperiments);
        }
        if settings.turn_cap == 0 {
            return Err(RunExperimentError::InvalidTurnCap);
        }

        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        info!(
            "Starting experiment: {} runs, {} turns, prompt {}, solver {}",
            params.num_experiments, settings.turn_cap, settings.prompt_version, settings.solver
        );
        progress.on_experiment_start(params.num_experiments);

        let mut runs = Vec::with_capacity(params.num_experiments);
        let mut records: Vec<RunMetrics> = Vec::new();
        let mut aborted = 0;
        let mut failed = 0;

        for index in 0..params.num_experiments {
            let profile = self.generator.generate(&mut rng);
            progress.on_run_start(index, &profile);

            let mut run_input = RunCanvassInput::new(index, profile.clone(), settings.clone());
            if settings.fix_prior {
                run_input = run_input
                    .with_fixed_prior(self.priors.sample(profile.affiliation(), &mut rng));
            }

            let status = match self
                .canvass
                .execute_with_progress(run_input, progress)
                .await
            {
                Ok(outcome) => RunStatus::from(outcome),
                Err(e) => {
                    warn!("Run {} failed: {}", index, e);
                    RunStatus::failed(e)
                }
            };

            match &status {
                RunStatus::Completed(result) => {
                    let metrics = RunMetrics::from(result);
                    self.recorder.record(metrics.clone());
                    records.push(metrics);
                }
                RunStatus::Aborted { .. } => aborted += 1,
                RunStatus::Failed { .. } => failed += 1,
            }

            progress.on_run_complete(index, &status);
            runs.push(RunReport {
                index,
                profile,
                status,
            });
        }

        let summary = ExperimentSummary::from_records(&records, aborted, failed);
        info!(
            "Experiment finished: {} completed, {} aborted, {} failed",
            summary.completed_runs, summary.aborted_runs, summary.failed_runs
        );
        progress.on_experiment_complete(&summary);

        Ok(ExperimentReport { runs, summary })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoleModel;
    use crate::ports::metrics_recorder::InMemoryMetricsRecorder;
    use crate::ports::solver::Solver;
    use crate::solvers::testing::{ScriptedGateway, ScriptedSolver};
    use crate::use_cases::extract_likelihood::ExtractLikelihoodUseCase;
    use canvass_domain::{Model, PriorSource};
    use std::sync::Mutex;

    fn use_case(
        canvasser: Vec<Option<&str>>,
        mark: Vec<Option<&str>>,
        summary: Vec<&str>,
        recorder: Arc<InMemoryMetricsRecorder>,
    ) -> RunExperimentUseCase<ScriptedGateway> {
        let extractor = ExtractLikelihoodUseCase::new(
            Arc::new(ScriptedGateway::new(summary)),
            RoleModel::new(Model::Gpt4oMini, Some(0.0)),
        );
        let canvass = RunCanvassUseCase::new(
            Arc::new(ScriptedSolver::new(canvasser)) as Arc<dyn Solver>,
            Arc::new(ScriptedSolver::new(mark)) as Arc<dyn Solver>,
            extractor,
        );
        RunExperimentUseCase::new(canvass, recorder)
    }

    fn input(num_experiments: usize, seed: u64) -> RunExperimentInput {
        RunExperimentInput::new(
            CanvassSettings::default().with_turn_cap(1),
            ExperimentParams::default()
                .with_num_experiments(num_experiments)
                .with_seed(Some(seed)),
        )
    }

    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_experiment_start(&self, total_runs: usize) {
            self.events.lock().unwrap().push(format!("start {total_runs}"));
        }

        fn on_run_complete(&self, index: usize, status: &RunStatus) {
            self.events
                .lock()
                .unwrap()
                .push(format!("run {index} {}", status.label()));
        }

        fn on_experiment_complete(&self, summary: &ExperimentSummary) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done {}", summary.total_runs()));
        }
    }

    #[tokio::test]
    async fn test_failed_run_does_not_stop_batch() {
        let recorder = Arc::new(InMemoryMetricsRecorder::new());
        let use_case = use_case(
            vec![Some("Hi!"), Some("Hi!"), Some("Hi!")],
            vec![
                Some("Hello?"),
                Some("ANSWER: 80%, 90%"),
                Some("Hello?"),
                Some("No comment."),
                Some("Hello?"),
                None,
            ],
            vec!["Cannot tell."],
            Arc::clone(&recorder),
        );

        let progress = RecordingProgress {
            events: Mutex::new(Vec::new()),
        };
        let report = use_case
            .execute_with_progress(input(3, 7), &progress)
            .await
            .unwrap();

        assert_eq!(report.runs.len(), 3);
        assert_eq!(report.runs[0].status.label(), "completed");
        assert_eq!(report.runs[1].status.label(), "failed");
        assert_eq!(report.runs[2].status.label(), "aborted");
        assert_eq!(report.summary.completed_runs, 1);
        assert_eq!(report.summary.failed_runs, 1);
        assert_eq!(report.summary.aborted_runs, 1);
        assert_eq!(report.summary.mean_target_vote_likelihood, Some(80.0));
        assert_eq!(recorder.records().len(), 1);

        let events = progress.events.lock().unwrap();
        assert_eq!(events.first().map(String::as_str), Some("start 3"));
        assert_eq!(events.last().map(String::as_str), Some("done 3"));
    }

    #[tokio::test]
    async fn test_fixed_prior_is_sampled_in_band() {
        let recorder = Arc::new(InMemoryMetricsRecorder::new());
        let use_case = use_case(
            vec![Some("Hi!")],
            vec![Some("Hello?"), Some("ANSWER: 50%, 50%")],
            vec![],
            recorder,
        );

        let report = use_case.execute(input(1, 11)).await.unwrap();
        let run = &report.runs[0];
        let result = run.status.result().unwrap();
        assert_eq!(result.prior_source, PriorSource::Sampled);

        let bands = PriorDistribution::default().bands(run.profile.affiliation());
        assert!(bands.target.contains(result.prior.target));
        assert!(bands.turnout.contains(result.prior.turnout));
    }

    #[tokio::test]
    async fn test_same_seed_same_voters() {
        let script = || {
            (
                vec![Some("Hi!"), Some("Hi!")],
                vec![
                    Some("Hello?"),
                    Some("ANSWER: 50%, 50%"),
                    Some("Hello?"),
                    Some("ANSWER: 50%, 50%"),
                ],
            )
        };

        let (c1, m1) = script();
        let first = use_case(c1, m1, vec![], Arc::new(InMemoryMetricsRecorder::new()))
            .execute(input(2, 42))
            .await
            .unwrap();
        let (c2, m2) = script();
        let second = use_case(c2, m2, vec![], Arc::new(InMemoryMetricsRecorder::new()))
            .execute(input(2, 42))
            .await
            .unwrap();

        let names = |r: &ExperimentReport| -> Vec<String> {
            r.runs.iter().map(|run| run.profile.name().to_string()).collect()
        };
        assert_eq!(names(&first), names(&second));
        assert_eq!(
            first.runs[0].status.result().unwrap().prior,
            second.runs[0].status.result().unwrap().prior
        );
    }

    #[tokio::test]
    async fn test_zero_experiments_rejected() {
        let use_case = use_case(vec![], vec![], vec![], Arc::new(InMemoryMetricsRecorder::new()));
        let err = use_case.execute(input(0, 1)).await.unwrap_err();
        assert!(matches!(err, RunExperimentError::ZeroExperiments));
    }

    #[tokio::test]
    async fn test_zero_turn_cap_rejected() {
        let use_case = use_case(vec![], vec![], vec![], Arc::new(InMemoryMetricsRecorder::new()));
        let mut input = input(1, 1);
        input.settings = input.settings.with_turn_cap(0);
        let err = use_case.execute(input).await.unwrap_err();
        assert!(matches!(err, RunExperimentError::InvalidTurnCap));
    }
}
