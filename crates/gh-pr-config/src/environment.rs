//! Process environment: `.env` loading and organization resolution

use crate::AppConfig;
use log::{debug, warn};
use thiserror::Error;

/// Environment variable naming the organization to browse
pub const ORG_ENV_VAR: &str = "GITHUB_ORG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "No organization configured. Set GITHUB_ORG (e.g. in a .env file) \
         or `organization` in .gh-pr-manager.toml"
    )]
    MissingOrganization,
}

/// Load a `.env` file from the current directory or its parents, if any
///
/// Variables already set in the process environment are not overridden.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!("Ignoring unreadable .env file: {}", e),
    }
}

/// Everything the application needs before it can start
#[derive(Debug, Clone)]
pub struct Settings {
    pub organization: String,
    pub config: AppConfig,
}

impl Settings {
    /// Resolve settings from the process environment and config file
    pub fn load(config: AppConfig) -> Result<Self, ConfigError> {
        Self::resolve(std::env::var(ORG_ENV_VAR).ok(), config)
    }

    fn resolve(org_from_env: Option<String>, config: AppConfig) -> Result<Self, ConfigError> {
        let organization = org_from_env
            .or_else(|| config.organization.clone())
            .map(|org| org.trim().to_string())
            .filter(|org| !org.is_empty())
            .ok_or(ConfigError::MissingOrganization)?;

        Ok(Self {
            organization,
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config_with_org(org: Option<&str>) -> AppConfig {
        AppConfig {
            organization: org.map(str::to_string),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_env_wins_over_config_file() {
        let settings =
            Settings::resolve(Some("from-env".to_string()), config_with_org(Some("from-file")))
                .unwrap();
        assert_eq!(settings.organization, "from-env");
    }

    #[test]
    fn test_config_file_is_used_without_env() {
        let settings = Settings::resolve(None, config_with_org(Some(" acme "))).unwrap();
        assert_eq!(settings.organization, "acme");
    }

    #[test]
    fn test_missing_organization() {
        assert_eq!(
            Settings::resolve(None, config_with_org(None)).unwrap_err(),
            ConfigError::MissingOrganization
        );
        assert_eq!(
            Settings::resolve(Some("  ".to_string()), config_with_org(None)).unwrap_err(),
            ConfigError::MissingOrganization
        );
    }
}
