//! Application configuration
//!
//! Configuration loaded from `.gh-pr-manager.toml` or the user config directory.

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Organization to browse; `GITHUB_ORG` takes precedence
    #[serde(default)]
    pub organization: Option<String>,

    /// Default message for PR approvals
    #[serde(default = "default_approval_message")]
    pub approval_message: String,

    /// Default message for PR comments
    #[serde(default)]
    pub comment_message: String,

    /// Default message for requesting changes on PRs
    #[serde(default = "default_request_changes_message")]
    pub request_changes_message: String,

    /// How PRs are merged: "merge", "squash" or "rebase"
    #[serde(default = "default_merge_method")]
    pub merge_method: String,

    /// List oldest PRs first on startup
    #[serde(default)]
    pub oldest_first: bool,
}

fn default_approval_message() -> String {
    "Approved via gh-pr-manager".to_string()
}

fn default_request_changes_message() -> String {
    "Please address the following concerns:".to_string()
}

fn default_merge_method() -> String {
    "merge".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            organization: None,
            approval_message: default_approval_message(),
            comment_message: String::new(),
            request_changes_message: default_request_changes_message(),
            merge_method: default_merge_method(),
            oldest_first: false,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    pub fn load() -> Self {
        match crate::load_config_file() {
            Some(content) => Self::parse_or_default(&content),
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        }
    }

    fn parse_or_default(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.organization, None);
        assert_eq!(config.approval_message, "Approved via gh-pr-manager");
        assert!(config.comment_message.is_empty()); // user must enter a comment
        assert!(!config.request_changes_message.is_empty());
        assert_eq!(config.merge_method, "merge");
        assert!(!config.oldest_first);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            organization = "acme"
            merge_method = "squash"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.organization.as_deref(), Some("acme"));
        assert_eq!(config.merge_method, "squash");
        // Other fields should use defaults
        assert_eq!(config.approval_message, "Approved via gh-pr-manager");
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let config = AppConfig::parse_or_default("oldest_first = \"sometimes\"");
        assert_eq!(config, AppConfig::default());
    }
}
