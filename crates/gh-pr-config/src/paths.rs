//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/gh-pr-manager/`, `~/.cache/gh-pr-manager/`
//! - macOS: `~/Library/Application Support/gh-pr-manager/`, `~/Library/Caches/gh-pr-manager/`
//! - Windows: `%APPDATA%\gh-pr-manager\`, `%LOCALAPPDATA%\gh-pr-manager\`

use anyhow::{Context, Result};
use std::path::PathBuf;

pub const APP_NAME: &str = "gh-pr-manager";

/// Get the application config directory
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get the application cache directory, creating it if needed
///
/// Release builds write their log files here.
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_path() {
        if let Ok(path) = app_config_path() {
            assert!(path.ends_with("gh-pr-manager/config.toml"));
        }
    }
}
