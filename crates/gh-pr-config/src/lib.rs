//! Configuration and file management for gh-pr-manager
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Environment handling (`.env`, organization resolution)

pub mod app_config;
pub mod config_file;
pub mod environment;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use environment::{load_dotenv, ConfigError, Settings, ORG_ENV_VAR};
