//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`ModelConfig`] — which model (and temperature) backs each role
//! - [`CanvassSettings`] — per-call rules (turn cap, withdrawal, priors)
//! - [`ExperimentParams`] — batch control (number of runs, seed)

pub mod canvass_settings;
pub mod experiment_params;
pub mod model_config;

pub use canvass_settings::CanvassSettings;
pub use experiment_params::ExperimentParams;
pub use model_config::{ModelConfig, RoleModel};
