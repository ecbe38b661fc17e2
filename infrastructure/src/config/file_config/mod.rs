//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod experiment;
mod logging;
mod models;
mod output;
mod provider;

pub use experiment::FileExperimentConfig;
pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;

use canvass_application::{CanvassSettings, ExperimentParams, ModelConfig};
use canvass_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Role-based model selection
    pub models: FileModelsConfig,
    /// Batch and per-call settings
    pub experiment: FileExperimentConfig,
    /// Chat completions endpoint
    pub provider: FileProviderConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Transcript logging
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Empty model names across all roles
    /// 2. Enum parse failures (prompt_version, solver)
    /// 3. Zero turn cap or experiment count
    /// 4. Missing API key (warning)
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.models.to_model_config().1);
        issues.extend(self.experiment.to_settings().1);
        issues.extend(self.experiment.to_params().1);

        if self.provider.resolve_api_key().is_none() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingApiKey {
                    env_var: self.provider.api_key_env.clone(),
                },
                format!(
                    "provider: no api_key set and ${} is empty",
                    self.provider.api_key_env
                ),
            ));
        }

        issues
    }

    pub fn model_config(&self) -> ModelConfig {
        self.models.to_model_config().0
    }

    pub fn canvass_settings(&self) -> CanvassSettings {
        self.experiment.to_settings().0
    }

    pub fn experiment_params(&self) -> ExperimentParams {
        self.experiment.to_params().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvass_domain::{Model, OutputFormat, PromptVersion, Severity, SolverKind};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[models]
canvasser = "gpt-4o"
mark = "gpt-4.1-mini"

[experiment]
num_experiments = 20
turn_cap = 3
allow_withdraw = true
prompt_version = "generous"
solver = "cot"
seed = 99

[provider]
base_url = "http://localhost:8000"
api_key = "sk-test"

[output]
format = "full"
color = false

[logging]
conversation_log = "calls.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model_config().canvasser.model, Model::Gpt4o);
        assert_eq!(config.model_config().mark.model, Model::Gpt41Mini);

        let settings = config.canvass_settings();
        assert_eq!(settings.turn_cap, 3);
        assert!(settings.allow_withdraw);
        assert_eq!(settings.prompt_version, PromptVersion::Generous);
        assert_eq!(settings.solver, SolverKind::Cot);

        let params = config.experiment_params();
        assert_eq!(params.num_experiments, 20);
        assert_eq!(params.seed, Some(99));

        assert_eq!(config.provider.base_url, "http://localhost:8000");
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
        assert_eq!(
            config.logging.conversation_log.as_deref(),
            Some(std::path::Path::new("calls.jsonl"))
        );
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[experiment]
turn_cap = 6
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.canvass_settings().turn_cap, 6);
        // Defaults should apply
        assert!(config.canvass_settings().fix_prior);
        assert_eq!(config.experiment_params().num_experiments, 100);
        assert!(config.models.canvasser.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[models]
mark = ""

[experiment]
turn_cap = 0
solver = "tree-of-thought"

[provider]
api_key_env = "CANVASS_TEST_UNSET_KEY_VAR"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert_eq!(
            issues.iter().filter(|i| i.severity == Severity::Error).count(),
            3
        );
        assert!(
            issues
                .iter()
                .any(|i| matches!(i.code, ConfigIssueCode::MissingApiKey { .. }))
        );
    }
}
