//! GitHub API client for organization-wide pull request browsing
//!
//! This crate provides a trait-based GitHub API client. The application
//! depends on [`GitHubClient`] only; [`OctocrabClient`] is the production
//! implementation and tests substitute in-memory fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                 │
//! │  - fetch_organization_repositories()            │
//! │  - fetch_pull_requests() / fetch_pull_request() │
//! │  - fetch_pull_request_files()                   │
//! │  - add_comment() / create_review() / merge...() │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{connect, fetch_organization_pull_requests, GitHubClient, TokenResolver};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client: Arc<dyn GitHubClient> = Arc::new(connect(&TokenResolver::from_env()).await?);
//! let prs = fetch_organization_pull_requests(client, "rust-lang").await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod octocrab_client;
pub mod organization;
pub mod types;

/// Default GitHub host (public GitHub)
pub const DEFAULT_HOST: &str = "github.com";

pub use auth::{connect, TokenResolver};
pub use client::GitHubClient;
pub use octocrab_client::OctocrabClient;
pub use organization::fetch_organization_pull_requests;
pub use types::{
    ChangedFile, FileStatus, MergeMethod, MergeResult, PullRequest, PullRequestDetails,
    PullRequestState, Repository, ReviewEvent,
};
