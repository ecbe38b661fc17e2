//! CLI entrypoint for canvass-sim
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use canvass_application::{
    ConversationLogger, DirectSolver, ExtractLikelihoodUseCase, InMemoryMetricsRecorder,
    NoProgress, ProgressNotifier, RunCanvassUseCase, RunExperimentInput, RunExperimentUseCase,
    canvasser_solver,
};
use canvass_domain::{OutputFormat, Severity, config::validation::has_errors};
use canvass_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, OpenAiCompatibleGateway,
};
use canvass_presentation::{Cli, ConsoleFormatter, OutputConfig, ProgressReporter, SimpleProgress};
use clap::Parser;
use colored::Colorize;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    info!("Starting canvass-sim");

    // Load configuration
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("{} {}", "error:".red().bold(), issue.message),
            Severity::Warning => eprintln!("{} {}", "warning:".yellow().bold(), issue.message),
        }
    }
    if has_errors(&issues) {
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }

    let output = OutputConfig::resolve(&cli, config.output.format, config.output.color);
    if !output.color {
        colored::control::set_override(false);
    }

    let models = config.model_config();
    let settings = config.canvass_settings();
    let params = config.experiment_params();

    // === Dependency Injection ===
    let gateway = Arc::new(
        OpenAiCompatibleGateway::from_config(&config.provider)
            .context("Failed to create chat completions client")?,
    );
    info!("Using endpoint {}", gateway.endpoint());

    let canvasser = canvasser_solver(settings.solver, Arc::clone(&gateway), models.canvasser);
    let mark = Arc::new(DirectSolver::new(Arc::clone(&gateway), models.mark));
    let extractor = ExtractLikelihoodUseCase::new(Arc::clone(&gateway), models.summary);

    let mut canvass = RunCanvassUseCase::new(canvasser, mark, extractor);
    if let Some(path) = &config.logging.conversation_log {
        match JsonlConversationLogger::create(path) {
            Ok(logger) => {
                info!("Writing call transcripts to {}", logger.path().display());
                let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
                canvass = canvass.with_conversation_logger(logger);
            }
            Err(e) => warn!("Could not open conversation log {}: {}", path.display(), e),
        }
    }

    let recorder = Arc::new(InMemoryMetricsRecorder::new());
    let use_case = RunExperimentUseCase::new(canvass, recorder);
    let input = RunExperimentInput::new(settings, params);

    // Progress bars only make sense on a terminal; redirected stderr gets plain lines
    let progress: Box<dyn ProgressNotifier> = if !output.show_progress {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };
    let report = use_case
        .execute_with_progress(input, progress.as_ref())
        .await?;

    let rendered = match output.format {
        OutputFormat::Full => ConsoleFormatter::format(&report),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&report),
        OutputFormat::Json => ConsoleFormatter::format_json(&report),
    };
    println!("{}", rendered);

    Ok(())
}

/// Initialize tracing based on verbosity level, optionally into a file
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = &cli.log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

/// Apply CLI flags on top of the merged file configuration
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    let experiment = &mut config.experiment;
    if let Some(n) = cli.num_experiments {
        experiment.num_experiments = n;
    }
    if let Some(turn_cap) = cli.turn_cap {
        experiment.turn_cap = turn_cap;
    }
    if cli.allow_withdraw {
        experiment.allow_withdraw = true;
    }
    if cli.hide_voter_info {
        experiment.access_info = false;
    }
    if cli.elicit_prior {
        experiment.fix_prior = false;
    }
    if let Some(version) = cli.prompt_version {
        experiment.prompt_version = version.to_string();
    }
    if let Some(solver) = cli.solver {
        experiment.solver = solver.to_string();
    }
    if cli.seed.is_some() {
        experiment.seed = cli.seed;
    }

    let models = &mut config.models;
    if cli.canvasser_model.is_some() {
        models.canvasser = cli.canvasser_model.clone();
    }
    if cli.mark_model.is_some() {
        models.mark = cli.mark_model.clone();
    }
    if cli.summary_model.is_some() {
        models.summary = cli.summary_model.clone();
    }

    if let Some(base_url) = &cli.base_url {
        config.provider.base_url = base_url.clone();
    }
    if cli.conversation_log.is_some() {
        config.logging.conversation_log = cli.conversation_log.clone();
    }
}
