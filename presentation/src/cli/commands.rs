//! CLI command definitions

use canvass_domain::{PromptVersion, SolverKind};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for experiment results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Per-run lines followed by the summary
    Full,
    /// Only the aggregate summary
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for canvass_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => canvass_domain::OutputFormat::Full,
            OutputFormat::Summary => canvass_domain::OutputFormat::Summary,
            OutputFormat::Json => canvass_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for canvass-sim
#[derive(Parser, Debug)]
#[command(name = "canvass-sim")]
#[command(author, version, about = "Simulated political canvassing calls between two LLMs")]
#[command(long_about = r#"
canvass-sim runs simulated phone-banking calls: a canvasser model tries to
persuade a voter model with a randomly generated persona, and the voter's
vote likelihoods are measured before and after the call.

Each run has three stages:
1. Prior: the voter states (or is given) its likelihood to vote
2. Call: canvasser and voter alternate for up to --turn-cap exchanges
3. Final: the voter restates its likelihood after hanging up

Configuration files are loaded from (in priority order):
1. CANVASS_* environment variables (e.g. CANVASS_EXPERIMENT__TURN_CAP=3)
2. --config <path>     Explicit config file
3. ./canvass.toml      Project-level config
4. ~/.config/canvass-sim/config.toml   Global config

Example:
  canvass-sim -n 20 --turn-cap 3
  canvass-sim --mark-model gpt-4o --prompt-version guarded --solver cot -o full
  canvass-sim -n 5 --elicit-prior --allow-withdraw --conversation-log calls.jsonl
"#)]
pub struct Cli {
    /// Number of independent runs
    #[arg(short = 'n', long, value_name = "N")]
    pub num_experiments: Option<usize>,

    /// Maximum canvasser/voter exchanges per call
    #[arg(short, long, value_name = "N")]
    pub turn_cap: Option<usize>,

    /// Let the voter end the call early with [WITHDRAW]
    #[arg(long)]
    pub allow_withdraw: bool,

    /// Do not brief the canvasser on the voter's demographics
    #[arg(long)]
    pub hide_voter_info: bool,

    /// Ask the voter for its prior instead of sampling one
    #[arg(long)]
    pub elicit_prior: bool,

    /// Voter disposition: balanced, guarded or generous
    #[arg(long, value_name = "VERSION")]
    pub prompt_version: Option<PromptVersion>,

    /// Canvasser strategy: direct or cot
    #[arg(long, value_name = "SOLVER")]
    pub solver: Option<SolverKind>,

    /// Model for the canvasser
    #[arg(long, value_name = "MODEL")]
    pub canvasser_model: Option<String>,

    /// Model for the voter
    #[arg(long, value_name = "MODEL")]
    pub mark_model: Option<String>,

    /// Model used to extract likelihoods from free text
    #[arg(long, value_name = "MODEL")]
    pub summary_model: Option<String>,

    /// Seed for persona and prior sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Base URL of the OpenAI-compatible endpoint
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Write every call as JSONL events to this file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
