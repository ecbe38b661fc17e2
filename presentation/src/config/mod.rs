//! Presentation-level configuration
//!
//! Resolves how results are shown from CLI flags and the `[output]` section.

use crate::cli::commands::Cli;
use canvass_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show the progress bar
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// CLI flags win over file settings
    pub fn resolve(cli: &Cli, file_format: Option<OutputFormat>, file_color: bool) -> Self {
        Self {
            format: cli
                .output
                .map(OutputFormat::from)
                .or(file_format)
                .unwrap_or_default(),
            color: file_color && !cli.no_color,
            show_progress: !cli.quiet,
        }
    }
}
