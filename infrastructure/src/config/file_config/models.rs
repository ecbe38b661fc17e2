//! Role-based model configuration from TOML (`[models]` section)

use canvass_application::{ModelConfig, RoleModel};
use canvass_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};

/// Role-based model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// canvasser = "gpt-4o"         # Persuading party
/// mark = "gpt-4o-mini"         # Simulated voter
/// summary = "gpt-4o-mini"      # Answer extraction fallback
/// mark_temperature = 1.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub canvasser: Option<String>,
    pub mark: Option<String>,
    pub summary: Option<String>,
    pub canvasser_temperature: Option<f32>,
    pub mark_temperature: Option<f32>,
    pub summary_temperature: Option<f32>,
}

impl FileModelsConfig {
    /// Parse a single model string, collecting issues for empty names.
    fn parse_single_model(
        field: &str,
        value: Option<&String>,
    ) -> (Option<Model>, Vec<ConfigIssue>) {
        match value {
            None => (None, Vec::new()),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: field.to_string(),
                    },
                    format!("models.{}: model name cannot be empty", field),
                )],
            ),
            // Unknown names become Model::Custom
            Some(s) => (Some(Model::from(s.trim())), Vec::new()),
        }
    }

    pub fn parse_canvasser(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("canvasser", self.canvasser.as_ref())
    }

    pub fn parse_mark(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("mark", self.mark.as_ref())
    }

    pub fn parse_summary(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("summary", self.summary.as_ref())
    }

    /// Overlay the configured models on the defaults
    pub fn to_model_config(&self) -> (ModelConfig, Vec<ConfigIssue>) {
        let defaults = ModelConfig::default();
        let mut issues = Vec::new();

        let mut role = |parsed: (Option<Model>, Vec<ConfigIssue>),
                        temperature: Option<f32>,
                        default: RoleModel| {
            let (model, role_issues) = parsed;
            issues.extend(role_issues);
            RoleModel::new(
                model.unwrap_or(default.model),
                temperature.or(default.temperature),
            )
        };

        let config = ModelConfig {
            canvasser: role(
                self.parse_canvasser(),
                self.canvasser_temperature,
                defaults.canvasser,
            ),
            mark: role(self.parse_mark(), self.mark_temperature, defaults.mark),
            summary: role(
                self.parse_summary(),
                self.summary_temperature,
                defaults.summary,
            ),
        };
        (config, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_roles_keep_defaults() {
        let config = FileModelsConfig {
            canvasser: Some("gpt-4o".to_string()),
            ..Default::default()
        };
        let (models, issues) = config.to_model_config();
        assert!(issues.is_empty());
        assert_eq!(models.canvasser.model, Model::Gpt4o);
        assert_eq!(models.mark, ModelConfig::default().mark);
        assert_eq!(models.summary.temperature, Some(0.0));
    }

    #[test]
    fn test_custom_model_and_temperature() {
        let config = FileModelsConfig {
            mark: Some("llama-3.1-70b".to_string()),
            mark_temperature: Some(0.7),
            ..Default::default()
        };
        let (models, _) = config.to_model_config();
        assert_eq!(models.mark.model, Model::Custom("llama-3.1-70b".to_string()));
        assert_eq!(models.mark.temperature, Some(0.7));
    }

    #[test]
    fn test_empty_model_name_is_error() {
        let config = FileModelsConfig {
            summary: Some("  ".to_string()),
            ..Default::default()
        };
        let (models, issues) = config.to_model_config();
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::EmptyModelName { field } if field == "summary"
        ));
        assert_eq!(models.summary.model, Model::Gpt4oMini);
    }
}
