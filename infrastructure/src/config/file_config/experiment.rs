//! Experiment configuration from TOML (`[experiment]` section)

use canvass_application::{CanvassSettings, ExperimentParams};
use canvass_domain::{ConfigIssue, ConfigIssueCode, PromptVersion, SolverKind};
use serde::{Deserialize, Serialize};

/// Raw experiment configuration from TOML
///
/// # Example
///
/// ```toml
/// [experiment]
/// num_experiments = 50
/// turn_cap = 3
/// allow_withdraw = true
/// access_info = false
/// fix_prior = false
/// prompt_version = "guarded"   # balanced | guarded | generous
/// solver = "cot"               # direct | cot
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExperimentConfig {
    pub num_experiments: usize,
    pub turn_cap: usize,
    pub allow_withdraw: bool,
    pub access_info: bool,
    pub fix_prior: bool,
    pub prompt_version: String,
    pub solver: String,
    pub seed: Option<u64>,
}

impl Default for FileExperimentConfig {
    fn default() -> Self {
        let settings = CanvassSettings::default();
        let params = ExperimentParams::default();
        Self {
            num_experiments: params.num_experiments,
            turn_cap: settings.turn_cap,
            allow_withdraw: settings.allow_withdraw,
            access_info: settings.access_info,
            fix_prior: settings.fix_prior,
            prompt_version: settings.prompt_version.to_string(),
            solver: settings.solver.to_string(),
            seed: params.seed,
        }
    }
}

impl FileExperimentConfig {
    pub fn parse_prompt_version(&self) -> (PromptVersion, Vec<ConfigIssue>) {
        match self.prompt_version.parse::<PromptVersion>() {
            Ok(version) => (version, Vec::new()),
            Err(_) => (
                PromptVersion::default(),
                vec![invalid_enum(
                    "experiment.prompt_version",
                    &self.prompt_version,
                    &["balanced", "guarded", "generous"],
                )],
            ),
        }
    }

    pub fn parse_solver(&self) -> (SolverKind, Vec<ConfigIssue>) {
        match self.solver.parse::<SolverKind>() {
            Ok(solver) => (solver, Vec::new()),
            Err(_) => (
                SolverKind::default(),
                vec![invalid_enum(
                    "experiment.solver",
                    &self.solver,
                    &["direct", "cot"],
                )],
            ),
        }
    }

    pub fn to_settings(&self) -> (CanvassSettings, Vec<ConfigIssue>) {
        let (prompt_version, mut issues) = self.parse_prompt_version();
        let (solver, solver_issues) = self.parse_solver();
        issues.extend(solver_issues);

        if self.turn_cap == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTurnCap,
                "experiment.turn_cap: must be at least 1",
            ));
        }

        let settings = CanvassSettings::default()
            .with_turn_cap(self.turn_cap)
            .with_allow_withdraw(self.allow_withdraw)
            .with_access_info(self.access_info)
            .with_fix_prior(self.fix_prior)
            .with_prompt_version(prompt_version)
            .with_solver(solver);
        (settings, issues)
    }

    pub fn to_params(&self) -> (ExperimentParams, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        if self.num_experiments == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroExperiments,
                "experiment.num_experiments: must be at least 1",
            ));
        }
        let params = ExperimentParams::default()
            .with_num_experiments(self.num_experiments)
            .with_seed(self.seed);
        (params, issues)
    }
}

fn invalid_enum(field: &str, value: &str, valid: &[&str]) -> ConfigIssue {
    ConfigIssue::error(
        ConfigIssueCode::InvalidEnumValue {
            field: field.to_string(),
            value: value.to_string(),
            valid_values: valid.iter().map(|v| v.to_string()).collect(),
        },
        format!(
            "{}: unknown value '{}' (expected one of: {})",
            field,
            value,
            valid.join(", ")
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_application_defaults() {
        let (settings, issues) = FileExperimentConfig::default().to_settings();
        assert!(issues.is_empty());
        assert_eq!(settings, CanvassSettings::default());

        let (params, _) = FileExperimentConfig::default().to_params();
        assert_eq!(params, ExperimentParams::default());
    }

    #[test]
    fn test_unknown_prompt_version() {
        let config = FileExperimentConfig {
            prompt_version: "hostile".to_string(),
            ..Default::default()
        };
        let (version, issues) = config.parse_prompt_version();
        assert_eq!(version, PromptVersion::Balanced);
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::InvalidEnumValue { value, .. } if value == "hostile"
        ));
    }

    #[test]
    fn test_zero_counts_are_errors() {
        let config = FileExperimentConfig {
            turn_cap: 0,
            num_experiments: 0,
            ..Default::default()
        };
        let (_, settings_issues) = config.to_settings();
        let (_, params_issues) = config.to_params();
        assert_eq!(settings_issues[0].code, ConfigIssueCode::ZeroTurnCap);
        assert_eq!(params_issues[0].code, ConfigIssueCode::ZeroExperiments);
    }
}
