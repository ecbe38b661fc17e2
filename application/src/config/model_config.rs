//! Role-based model configuration.

use canvass_domain::Model;
use serde::{Deserialize, Serialize};

/// A model plus its sampling temperature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleModel {
    pub model: Model,
    /// `None` leaves the provider default in place
    pub temperature: Option<f32>,
}

impl RoleModel {
    pub fn new(model: Model, temperature: Option<f32>) -> Self {
        Self { model, temperature }
    }
}

/// Models backing the three roles of a run
///
/// | Role | Default | Temperature |
/// |------|---------|-------------|
/// | canvasser | gpt-4o-mini | provider default |
/// | mark | gpt-4o-mini | 1.0 |
/// | summary | gpt-4o-mini | 0.0 |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub canvasser: RoleModel,
    pub mark: RoleModel,
    pub summary: RoleModel,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            canvasser: RoleModel::new(Model::Gpt4oMini, None),
            mark: RoleModel::new(Model::Gpt4oMini, Some(1.0)),
            summary: RoleModel::new(Model::Gpt4oMini, Some(0.0)),
        }
    }
}
