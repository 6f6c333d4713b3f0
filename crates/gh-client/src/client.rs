//! GitHub client trait
//!
//! This module defines the core `GitHubClient` trait that all client
//! implementations must satisfy. The application only talks to GitHub
//! through this trait, which keeps it testable with in-memory fakes.

use crate::types::{
    ChangedFile, MergeMethod, MergeResult, PullRequest, PullRequestDetails, Repository,
    ReviewEvent,
};
use async_trait::async_trait;

/// GitHub API client trait
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{GitHubClient, PullRequest};
///
/// async fn list_prs(client: &dyn GitHubClient) -> anyhow::Result<Vec<PullRequest>> {
///     client.fetch_pull_requests("rust-lang", "rust").await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch every repository of an organization
    ///
    /// Follows pagination until GitHub returns a short page.
    async fn fetch_organization_repositories(&self, org: &str) -> anyhow::Result<Vec<Repository>>;

    /// Fetch open pull requests for a repository
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    async fn fetch_pull_requests(&self, owner: &str, repo: &str)
        -> anyhow::Result<Vec<PullRequest>>;

    /// Fetch a single pull request by number
    ///
    /// This returns full PR details including commits, changed files and
    /// additions/deletions which are not available in the list endpoint.
    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<PullRequestDetails>;

    /// Fetch the files changed by a pull request, including their patches
    async fn fetch_pull_request_files(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<Vec<ChangedFile>>;

    // === PR Operations ===

    /// Add an issue comment to a pull request
    async fn add_comment(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        body: &str,
    ) -> anyhow::Result<()>;

    /// Create a review on a pull request
    ///
    /// # Arguments
    ///
    /// * `event` - Approve or request changes
    /// * `body` - Review message (required by GitHub for `RequestChanges`)
    async fn create_review(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        event: ReviewEvent,
        body: &str,
    ) -> anyhow::Result<()>;

    /// Merge a pull request
    ///
    /// # Arguments
    ///
    /// * `merge_method` - How to merge (merge commit, squash, or rebase)
    /// * `commit_message` - Optional custom commit message
    ///
    /// # Returns
    ///
    /// Result of the merge operation. GitHub may answer without error
    /// and still report `merged: false`.
    async fn merge_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        merge_method: MergeMethod,
        commit_message: Option<&str>,
    ) -> anyhow::Result<MergeResult>;
}
