//! Configuration file loading for canvass-sim
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CANVASS_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./canvass.toml` or `./.canvass.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/canvass-sim/config.toml`
//! 5. Fallback: `~/.config/canvass-sim/config.toml`
//! 6. Default values
//!
//! CLI flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileExperimentConfig, FileLoggingConfig, FileModelsConfig, FileOutputConfig,
    FileProviderConfig,
};
pub use loader::ConfigLoader;
