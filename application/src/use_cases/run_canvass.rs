//! Run Canvass use case.
//!
//! Drives one simulated phone-banking call between a canvasser and a voter
//! (the "mark"). Each party keeps its own [`ConversationLog`]; every spoken
//! turn is copied into the other party's log with the role flipped.
//!
//! ```text
//! mark greeting
//!   → prior likelihood (elicited and stripped, or sampled)
//!   → { canvasser turn → mark turn } × turn_cap   (stops early on [WITHDRAW])
//!   → final likelihood
//! ```
//!
//! A party producing no output aborts the call with
//! [`RunOutcome::Aborted`]; transport and extraction failures are errors.
//!
//! [`ConversationLog`]: canvass_domain::ConversationLog

use crate::config::CanvassSettings;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::solver::{CurrentState, Solver, TaskState};
use crate::use_cases::extract_likelihood::{
    Extraction, ExtractionError, ExtractionStage, ExtractLikelihoodUseCase,
};
use canvass_domain::core::string::{single_line, truncate};
use canvass_domain::{
    AbortStage, Conversation, Party, PriorSource, PromptTemplate, RunOutcome, RunResult,
    ViolationCounts, VoteLikelihood, VoterProfile, contains_withdraw,
};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum RunCanvassError {
    #[error("Turn cap must be at least 1")]
    InvalidTurnCap,

    #[error("Could not extract {stage} likelihood: {source}")]
    Extraction {
        stage: ExtractionStage,
        #[source]
        source: ExtractionError,
    },

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Input for the [`RunCanvassUseCase`].
#[derive(Debug, Clone)]
pub struct RunCanvassInput {
    /// Index of the run inside its experiment, used in logs
    pub run_id: usize,
    pub profile: VoterProfile,
    /// A prior stated in the persona instead of elicited.
    ///
    /// The experiment runner samples one when `settings.fix_prior` is set.
    pub fixed_prior: Option<VoteLikelihood>,
    pub settings: CanvassSettings,
}

impl RunCanvassInput {
    pub fn new(run_id: usize, profile: VoterProfile, settings: CanvassSettings) -> Self {
        Self {
            run_id,
            profile,
            fixed_prior: None,
            settings,
        }
    }

    pub fn with_fixed_prior(mut self, prior: VoteLikelihood) -> Self {
        self.fixed_prior = Some(prior);
        self
    }
}

/// Task descriptions for both parties, rendered once per run
struct Tasks {
    canvasser: String,
    mark: String,
}

impl Tasks {
    fn render(input: &RunCanvassInput) -> Self {
        let settings = &input.settings;
        let briefing = settings.access_info.then_some(&input.profile);
        Self {
            canvasser: PromptTemplate::with_withdraw(
                PromptTemplate::canvasser_task(briefing, settings.turn_cap),
                settings.allow_withdraw,
            ),
            mark: PromptTemplate::with_withdraw(
                PromptTemplate::mark_task(
                    &input.profile,
                    settings.prompt_version,
                    input.fixed_prior.as_ref(),
                ),
                settings.allow_withdraw,
            ),
        }
    }

    fn for_party(&self, party: Party) -> &str {
        match party {
            Party::Canvasser => &self.canvasser,
            Party::Mark => &self.mark,
        }
    }
}

/// Mutable state of a call in progress
struct CallState {
    conversation: Conversation,
    canvasser_violations: ViolationCounts,
    mark_violations: ViolationCounts,
}

impl CallState {
    fn new() -> Self {
        Self {
            conversation: Conversation::new(),
            canvasser_violations: ViolationCounts::default(),
            mark_violations: ViolationCounts::default(),
        }
    }

    fn observe(&mut self, party: Party, text: &str) {
        match party {
            Party::Canvasser => self.canvasser_violations.observe(text),
            Party::Mark => self.mark_violations.observe(text),
        }
    }
}

/// Use case for running a single simulated call.
pub struct RunCanvassUseCase<G: LlmGateway + 'static> {
    canvasser: Arc<dyn Solver>,
    mark: Arc<dyn Solver>,
    extractor: ExtractLikelihoodUseCase<G>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> RunCanvassUseCase<G> {
    pub fn new(
        canvasser: Arc<dyn Solver>,
        mark: Arc<dyn Solver>,
        extractor: ExtractLikelihoodUseCase<G>,
    ) -> Self {
        Self {
            canvasser,
            mark,
            extractor,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub async fn execute(&self, input: RunCanvassInput) -> Result<RunOutcome, RunCanvassError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        input: RunCanvassInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<RunOutcome, RunCanvassError> {
        let turn_cap = input.settings.turn_cap;
        if turn_cap == 0 {
            return Err(RunCanvassError::InvalidTurnCap);
        }

        let run = input.run_id;
        let started = Instant::now();
        info!(
            "Run {}: calling {} ({}), {} turns",
            run,
            input.profile.name(),
            input.profile.affiliation(),
            turn_cap
        );
        self.conversation_logger
            .log(ConversationEvent::run_started(run, &input.profile));

        let tasks = Tasks::render(&input);
        let mut call = CallState::new();

        let greeting = input.profile.greeting();
        call.conversation.record(Party::Mark, &greeting);
        self.conversation_logger
            .log(ConversationEvent::turn(run, Party::Mark, 0, &greeting));

        // Prior
        let (prior, prior_source) = match input.fixed_prior {
            Some(prior) => (prior, PriorSource::Sampled),
            None => {
                let mark_log = call.conversation.view_mut(Party::Mark);
                mark_log.push_prompt(PromptTemplate::prior_vote_prompt());

                let Some(answer) = self
                    .take_turn(Party::Mark, &tasks, &call, &input, turn_cap)
                    .await?
                else {
                    return Ok(self.abort(run, Party::Mark, AbortStage::PriorElicitation));
                };
                call.observe(Party::Mark, &answer);
                self.log_answer(run, ExtractionStage::Prior, &answer);

                // The voter must not see its own prior estimate during the call
                let mark_log = call.conversation.view_mut(Party::Mark);
                mark_log.push_utterance(Party::Mark, answer.as_str());
                mark_log.truncate_last(2);

                let extraction = self.extract(run, ExtractionStage::Prior, &answer).await?;
                (extraction.likelihood, PriorSource::Elicited)
            }
        };
        debug!("Run {}: prior {} ({:?})", run, prior, prior_source);

        // Exchange
        let mut turns_completed = 0;
        while turns_completed < turn_cap {
            let turns_left = turn_cap - turns_completed;

            for party in [Party::Canvasser, Party::Mark] {
                let Some(text) = self
                    .take_turn(party, &tasks, &call, &input, turns_left)
                    .await?
                else {
                    return Ok(self.abort(run, party, AbortStage::Exchange(turns_completed)));
                };
                call.observe(party, &text);
                call.conversation.record(party, &text);

                self.conversation_logger.log(ConversationEvent::turn(
                    run,
                    party,
                    turns_completed + 1,
                    &text,
                ));
                progress.on_turn(party, turns_completed + 1);
            }

            turns_completed += 1;

            let withdrew = call
                .conversation
                .transcript()
                .last()
                .is_some_and(|u| u.party == Party::Mark && contains_withdraw(&u.text));
            if withdrew {
                info!("Run {}: voter withdrew after {} turns", run, turns_completed);
                break;
            }
        }

        // Final
        call.conversation
            .view_mut(Party::Mark)
            .push_prompt(PromptTemplate::final_vote_prompt());
        let Some(answer) = self
            .take_turn(Party::Mark, &tasks, &call, &input, 0)
            .await?
        else {
            return Ok(self.abort(run, Party::Mark, AbortStage::FinalElicitation));
        };
        call.observe(Party::Mark, &answer);
        self.log_answer(run, ExtractionStage::Final, &answer);
        let extraction = self.extract(run, ExtractionStage::Final, &answer).await?;

        let result = RunResult {
            prior,
            prior_source,
            final_likelihood: extraction.likelihood,
            num_replies: call.conversation.transcript().len(),
            turns_completed,
            duration: started.elapsed(),
            canvasser_violations: call.canvasser_violations,
            mark_violations: call.mark_violations,
            mark_withdrew: call.conversation.mark_withdrew(),
            voter_affiliation: input.profile.affiliation(),
        };

        info!(
            "Run {}: {} -> {} in {:.1}s",
            run,
            result.prior,
            result.final_likelihood,
            result.duration.as_secs_f64()
        );
        self.conversation_logger
            .log(ConversationEvent::run_completed(run, &result));

        Ok(RunOutcome::Completed(result))
    }

    async fn take_turn(
        &self,
        party: Party,
        tasks: &Tasks,
        call: &CallState,
        input: &RunCanvassInput,
        turns_left: usize,
    ) -> Result<Option<String>, GatewayError> {
        let state = TaskState {
            task_description: tasks.for_party(party).to_string(),
            messages: call.conversation.view(party).messages().to_vec(),
            current_state: CurrentState {
                party,
                prompt_version: input.settings.prompt_version,
                turns_left,
                max_turns: input.settings.turn_cap,
                allow_withdraw: input.settings.allow_withdraw,
            },
        };

        let solver = match party {
            Party::Canvasser => &self.canvasser,
            Party::Mark => &self.mark,
        };
        let output = solver.solve(&state).await?;

        Ok(output.filter(|text| !text.trim().is_empty()).inspect(|text| {
            debug!("{}: {}", party, truncate(&single_line(text), 120));
        }))
    }

    async fn extract(
        &self,
        run: usize,
        stage: ExtractionStage,
        text: &str,
    ) -> Result<Extraction, RunCanvassError> {
        let extraction = self
            .extractor
            .execute(text)
            .await
            .map_err(|source| RunCanvassError::Extraction { stage, source })?;

        self.conversation_logger
            .log(ConversationEvent::likelihood_extracted(
                run,
                stage.as_str(),
                &extraction.likelihood,
                extraction.via_summary,
            ));
        Ok(extraction)
    }

    fn log_answer(&self, run: usize, stage: ExtractionStage, text: &str) {
        self.conversation_logger
            .log(ConversationEvent::elicitation_answer(run, stage.as_str(), text));
    }

    fn abort(&self, run: usize, party: Party, stage: AbortStage) -> RunOutcome {
        warn!("Run {}: {} produced no output during {}", run, party, stage);
        self.conversation_logger
            .log(ConversationEvent::run_aborted(run, party, stage));
        RunOutcome::Aborted { party, stage }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoleModel;
    use crate::solvers::testing::{ScriptedGateway, ScriptedSolver};
    use canvass_domain::{Affiliation, ChatRole, Education, Gender, Issue, Model};
    use std::sync::Mutex;

    fn voter() -> VoterProfile {
        VoterProfile::new(
            "Dana Whitfield",
            41,
            Gender::Woman,
            Education::Bachelors,
            "Ohio",
            Affiliation::Swing,
            [Issue::Healthcare, Issue::Immigration],
        )
    }

    struct Harness {
        canvasser: Arc<ScriptedSolver>,
        mark: Arc<ScriptedSolver>,
        use_case: RunCanvassUseCase<ScriptedGateway>,
    }

    fn harness(
        canvasser: Vec<Option<&str>>,
        mark: Vec<Option<&str>>,
        summary: Vec<&str>,
    ) -> Harness {
        let canvasser = Arc::new(ScriptedSolver::new(canvasser));
        let mark = Arc::new(ScriptedSolver::new(mark));
        let extractor = ExtractLikelihoodUseCase::new(
            Arc::new(ScriptedGateway::new(summary)),
            RoleModel::new(Model::Gpt4oMini, Some(0.0)),
        );
        let use_case = RunCanvassUseCase::new(
            Arc::clone(&canvasser) as Arc<dyn Solver>,
            Arc::clone(&mark) as Arc<dyn Solver>,
            extractor,
        );
        Harness {
            canvasser,
            mark,
            use_case,
        }
    }

    fn input(turn_cap: usize) -> RunCanvassInput {
        RunCanvassInput::new(
            0,
            voter(),
            CanvassSettings::default().with_turn_cap(turn_cap),
        )
        .with_fixed_prior(VoteLikelihood::new(50.0, 60.0))
    }

    #[tokio::test]
    async fn test_runs_exactly_turn_cap_exchanges() {
        let h = harness(
            vec![Some("Hi Dana!"), Some("Can we count on you?")],
            vec![Some("Who is this?"), Some("Maybe."), Some("ANSWER: 65%, 80%")],
            vec![],
        );

        let outcome = h.use_case.execute(input(2)).await.unwrap();
        let result = outcome.result().unwrap();

        assert_eq!(result.turns_completed, 2);
        assert_eq!(result.num_replies, 5);
        assert_eq!(result.prior, VoteLikelihood::new(50.0, 60.0));
        assert_eq!(result.prior_source, PriorSource::Sampled);
        assert_eq!(result.final_likelihood, VoteLikelihood::new(65.0, 80.0));
        assert!(!result.mark_withdrew);
        assert_eq!(result.voter_affiliation, Affiliation::Swing);
        assert_eq!(h.canvasser.calls(), 2);
        assert_eq!(h.mark.calls(), 3);
    }

    #[tokio::test]
    async fn test_handoff_and_final_prompt_in_mark_view() {
        let h = harness(
            vec![Some("Hi Dana!")],
            vec![Some("Who is this?"), Some("ANSWER: 65%, 80%")],
            vec![],
        );
        h.use_case.execute(input(1)).await.unwrap();

        let states = h.mark.states();
        let final_state = states.last().unwrap();
        let roles: Vec<ChatRole> = final_state.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![ChatRole::Assistant, ChatRole::User, ChatRole::Assistant, ChatRole::User]
        );
        assert!(
            final_state.messages[3]
                .content
                .starts_with("The call is now over. ")
        );
        assert!(final_state.task_description.contains("50% likelihood"));

        let canvasser_state = &h.canvasser.states()[0];
        assert_eq!(canvasser_state.messages.len(), 1);
        assert_eq!(canvasser_state.messages[0].role, ChatRole::User);
        assert_eq!(canvasser_state.messages[0].content, "Hello, this is Dana Whitfield.");
        assert_eq!(canvasser_state.current_state.turns_left, 1);
    }

    #[tokio::test]
    async fn test_withdrawal_ends_exchange() {
        let h = harness(
            vec![Some("Hi Dana!"), Some("unused")],
            vec![Some("Not interested. [WITHDRAW]"), Some("ANSWER: 20%, 50%")],
            vec![],
        );

        let outcome = h.use_case.execute(input(4)).await.unwrap();
        let result = outcome.result().unwrap();
        assert_eq!(result.turns_completed, 1);
        assert_eq!(result.num_replies, 3);
        assert!(result.mark_withdrew);
        assert_eq!(h.canvasser.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_output_aborts() {
        let h = harness(vec![Some("Hi Dana!"), Some("  ")], vec![Some("Hello?")], vec![]);

        let outcome = h.use_case.execute(input(3)).await.unwrap();
        assert_eq!(
            outcome,
            RunOutcome::Aborted {
                party: Party::Canvasser,
                stage: AbortStage::Exchange(1),
            }
        );
    }

    #[tokio::test]
    async fn test_none_at_final_elicitation_aborts() {
        let h = harness(vec![Some("Hi Dana!")], vec![Some("Hello?"), None], vec![]);

        let outcome = h.use_case.execute(input(1)).await.unwrap();
        assert_eq!(
            outcome,
            RunOutcome::Aborted {
                party: Party::Mark,
                stage: AbortStage::FinalElicitation,
            }
        );
    }

    #[tokio::test]
    async fn test_none_at_prior_elicitation_aborts() {
        let h = harness(vec![Some("Hi Dana!")], vec![None], vec![]);
        let input = RunCanvassInput::new(0, voter(), CanvassSettings::default().with_turn_cap(2));

        let outcome = h.use_case.execute(input).await.unwrap();
        assert_eq!(
            outcome,
            RunOutcome::Aborted {
                party: Party::Mark,
                stage: AbortStage::PriorElicitation,
            }
        );
        assert_eq!(h.mark.calls(), 1);
        assert_eq!(h.canvasser.calls(), 0);
    }

    /// Keeps `(type, text)` of every logged event
    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(&'static str, Option<String>)>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            let text = event.payload["text"].as_str().map(str::to_string);
            self.events.lock().unwrap().push((event.event_type, text));
        }
    }

    #[tokio::test]
    async fn test_elicitation_answers_are_logged() {
        let logger = Arc::new(RecordingLogger::default());
        let h = harness(
            vec![Some("Hi Dana!")],
            vec![
                Some("Hard to say. ANSWER: 40%, 70%"),
                Some("Tell me more."),
                Some("ANSWER: 45%, 75%"),
            ],
            vec![],
        );
        let use_case = h
            .use_case
            .with_conversation_logger(Arc::clone(&logger) as Arc<dyn ConversationLogger>);
        let input = RunCanvassInput::new(0, voter(), CanvassSettings::default().with_turn_cap(1));
        use_case.execute(input).await.unwrap();

        let events = logger.events.lock().unwrap();
        let answers: Vec<&str> = events
            .iter()
            .filter(|(kind, _)| *kind == "elicitation_answer")
            .filter_map(|(_, text)| text.as_deref())
            .collect();
        assert_eq!(answers, vec!["Hard to say. ANSWER: 40%, 70%", "ANSWER: 45%, 75%"]);

        let kinds: Vec<&str> = events.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(kinds.first(), Some(&"run_started"));
        assert_eq!(kinds.last(), Some(&"run_completed"));
        // Exchange turns stay separate from the answers
        assert_eq!(kinds.iter().filter(|k| **k == "turn").count(), 3);
    }

    #[tokio::test]
    async fn test_elicited_prior_is_stripped() {
        let h = harness(
            vec![Some("Hi Dana!")],
            vec![
                Some("Hard to say. ANSWER: 40%, 70%"),
                Some("Tell me more."),
                Some("ANSWER: 45%, 75%"),
            ],
            vec![],
        );
        let input = RunCanvassInput::new(0, voter(), CanvassSettings::default().with_turn_cap(1));

        let outcome = h.use_case.execute(input).await.unwrap();
        let result = outcome.result().unwrap();
        assert_eq!(result.prior, VoteLikelihood::new(40.0, 70.0));
        assert_eq!(result.prior_source, PriorSource::Elicited);
        assert_eq!(result.num_replies, 3);

        let states = h.mark.states();
        // Elicitation: greeting + prompt
        assert_eq!(states[0].messages.len(), 2);
        assert!(!states[0].task_description.contains("Before this call"));
        // First exchange: greeting + canvasser pitch only
        assert_eq!(states[1].messages.len(), 2);
        assert!(
            states[1]
                .messages
                .iter()
                .all(|m| !m.content.contains("ANSWER"))
        );
    }

    #[tokio::test]
    async fn test_extraction_failure_is_error() {
        let h = harness(
            vec![Some("Hi Dana!")],
            vec![Some("Hello?"), Some("I'd rather not say.")],
            vec!["Unclear."],
        );

        let err = h.use_case.execute(input(1)).await.unwrap_err();
        assert!(matches!(
            err,
            RunCanvassError::Extraction {
                stage: ExtractionStage::Final,
                source: ExtractionError::NoAnswer { .. },
            }
        ));
    }

    #[tokio::test]
    async fn test_zero_turn_cap_rejected() {
        let h = harness(vec![], vec![], vec![]);
        let err = h.use_case.execute(input(0)).await.unwrap_err();
        assert!(matches!(err, RunCanvassError::InvalidTurnCap));
        assert_eq!(h.mark.calls(), 0);
    }

    #[tokio::test]
    async fn test_violations_accumulate_per_party() {
        let h = harness(
            vec![Some("[OPEN]"), Some("[OPEN] Hi again")],
            vec![
                Some("As an AI language model, hello."),
                Some("Sure."),
                Some("As an AI language model I think ANSWER: 50%, 50%"),
            ],
            vec![],
        );

        let outcome = h.use_case.execute(input(2)).await.unwrap();
        let result = outcome.result().unwrap();
        assert_eq!(result.canvasser_violations.empty_tags, 1);
        assert_eq!(result.canvasser_violations.broke_character, 0);
        assert_eq!(result.mark_violations.broke_character, 2);
    }

    #[tokio::test]
    async fn test_canvasser_briefing_follows_access_info() {
        let h = harness(
            vec![Some("Hi!")],
            vec![Some("Hello?"), Some("ANSWER: 50%, 50%")],
            vec![],
        );
        let mut input = input(1);
        input.settings = input.settings.with_access_info(false).with_allow_withdraw(true);
        h.use_case.execute(input).await.unwrap();

        let canvasser_task = &h.canvasser.states()[0].task_description;
        assert!(canvasser_task.contains("know nothing about"));
        assert!(canvasser_task.contains("[WITHDRAW]"));
        assert!(h.mark.states()[0].task_description.contains("[WITHDRAW]"));
    }

    #[tokio::test]
    async fn test_gateway_error_propagates() {
        let h = harness(vec![], vec![], vec![]);
        // Scripted solvers with nothing queued fail with a gateway error
        let err = h.use_case.execute(input(1)).await.unwrap_err();
        assert!(matches!(err, RunCanvassError::Gateway(_)));
    }
}
