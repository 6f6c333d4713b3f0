//! Token resolution and client construction

use crate::octocrab_client::OctocrabClient;
use crate::DEFAULT_HOST;
use anyhow::{Context, Result};
use log::{debug, info};
use octocrab::Octocrab;
use std::sync::Arc;

/// Environment variables checked for a token, in order
const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Token resolver for GitHub authentication
///
/// Tries in order:
/// 1. `GITHUB_TOKEN` or `GH_TOKEN` (a `.env` file counts once loaded)
/// 2. `gh auth token --hostname github.com` command
#[derive(Debug, Clone)]
pub struct TokenResolver {
    /// Token taken from the environment, if any
    env_token: Option<String>,
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::from_env()
    }
}

impl TokenResolver {
    /// Create a resolver reading the process environment
    pub fn from_env() -> Self {
        Self::with_lookup(|key| std::env::var(key).ok())
    }

    fn with_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let env_token = TOKEN_ENV_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .map(|token| token.trim().to_string())
            .find(|token| !token.is_empty());

        Self { env_token }
    }

    /// Resolve a token, falling back to the gh CLI
    pub async fn get_token(&self) -> Result<String> {
        if let Some(token) = &self.env_token {
            debug!("Using token from environment");
            return Ok(token.clone());
        }

        debug!("Trying gh auth token for host {}", DEFAULT_HOST);
        let output = tokio::process::Command::new("gh")
            .args(["auth", "token", "--hostname", DEFAULT_HOST])
            .output()
            .await;

        match output {
            Ok(output) if output.status.success() => {
                let token = String::from_utf8(output.stdout)
                    .context("Invalid UTF-8 in gh auth token output")?
                    .trim()
                    .to_string();
                if !token.is_empty() {
                    debug!("Using token from gh CLI");
                    return Ok(token);
                }
            }
            Ok(_) => debug!("gh auth token reported no login"),
            Err(e) => debug!("Could not run gh: {}", e),
        }

        Err(anyhow::anyhow!(
            "No GitHub token found. Set GITHUB_TOKEN (e.g. in a .env file) or run 'gh auth login'"
        ))
    }
}

/// Build an authenticated client
///
/// Must run inside a tokio runtime.
pub async fn connect(tokens: &TokenResolver) -> Result<OctocrabClient> {
    let token = tokens.get_token().await?;

    let octocrab = Octocrab::builder()
        .personal_token(token)
        .build()
        .context("Failed to build Octocrab client")?;

    info!("GitHub client created for host: {}", DEFAULT_HOST);
    Ok(OctocrabClient::new(Arc::new(octocrab)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn resolver(vars: &[(&str, &str)]) -> TokenResolver {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TokenResolver::with_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_github_token_takes_precedence() {
        let tokens = resolver(&[("GH_TOKEN", "gh"), ("GITHUB_TOKEN", "github")]);

        assert_eq!(tokens.env_token.as_deref(), Some("github"));
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let tokens = resolver(&[("GITHUB_TOKEN", "  "), ("GH_TOKEN", "gh\n")]);

        assert_eq!(tokens.env_token.as_deref(), Some("gh"));
    }

    #[test]
    fn test_no_token_in_environment() {
        assert_eq!(resolver(&[]).env_token, None);
    }

    #[tokio::test]
    async fn test_env_token_is_returned_without_gh() {
        let tokens = resolver(&[("GITHUB_TOKEN", "ghp_example")]);

        assert_eq!(tokens.get_token().await.unwrap(), "ghp_example");
    }
}
