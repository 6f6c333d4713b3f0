//! GitHub API data transfer objects
//!
//! These types represent the data returned from the GitHub API.
//! They are intentionally separate from application domain models
//! to keep this crate pure and reusable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A repository owned by an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name (e.g., "octocrab")
    pub name: String,

    /// Owner and name (e.g., "XAMPPRocky/octocrab")
    pub full_name: String,

    /// Whether the repository is archived
    pub archived: bool,
}

/// An open pull request as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Repository owner (the organization)
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// PR number (e.g., 123)
    pub number: u64,

    /// PR title
    pub title: String,

    /// Author's GitHub username
    pub author: String,

    /// When the PR was created
    pub created_at: DateTime<Utc>,

    /// PR URL for opening in browser
    pub html_url: String,
}

/// Lifecycle state of a pull request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PullRequestState {
    #[default]
    Open,
    Closed,
    Merged,
}

impl fmt::Display for PullRequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::Merged => "Merged",
        };
        f.write_str(label)
    }
}

/// Full pull request details from the single-PR endpoint
///
/// Counts like commits and additions are only computed by GitHub
/// on this endpoint, never on the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestDetails {
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub author: String,
    pub state: PullRequestState,

    /// Owner and name of the base repository
    pub repository: String,

    /// HEAD branch name (e.g., "feature/foo")
    pub head_branch: String,

    /// Base branch name (e.g., "main")
    pub base_branch: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Whether the PR is mergeable (None while GitHub is still computing it)
    pub mergeable: Option<bool>,

    pub comments: u64,
    pub commits: u64,
    pub changed_files: u64,
    pub additions: u64,
    pub deletions: u64,
    pub html_url: String,
}

/// Change status of a file in a pull request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Added,
    Removed,
    Modified,
    Renamed,
    Copied,
    Changed,
    Unchanged,
    #[serde(other)]
    Unknown,
}

impl FileStatus {
    /// The status as GitHub spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Modified => "modified",
            Self::Renamed => "renamed",
            Self::Copied => "copied",
            Self::Changed => "changed",
            Self::Unchanged => "unchanged",
            Self::Unknown => "unknown",
        }
    }
}

/// A file touched by a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    pub filename: String,
    pub status: FileStatus,
    pub additions: u64,
    pub deletions: u64,

    /// Unified diff of the file; absent for binary or oversized files
    #[serde(default)]
    pub patch: Option<String>,

    /// Name before a rename
    #[serde(default)]
    pub previous_filename: Option<String>,
}

/// Merge method for PRs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMethod {
    /// Create a merge commit
    #[default]
    Merge,
    /// Squash all commits into one
    Squash,
    /// Rebase commits onto the base branch
    Rebase,
}

impl FromStr for MergeMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "merge" => Ok(Self::Merge),
            "squash" => Ok(Self::Squash),
            "rebase" => Ok(Self::Rebase),
            other => Err(anyhow::anyhow!(
                "Unknown merge method '{}' (expected merge, squash or rebase)",
                other
            )),
        }
    }
}

impl fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Merge => "merge",
            Self::Squash => "squash",
            Self::Rebase => "rebase",
        };
        f.write_str(label)
    }
}

/// Result of a merge operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeResult {
    /// Whether the merge was successful
    pub merged: bool,
    /// Commit SHA of the merge commit (if successful)
    pub sha: Option<String>,
    /// Message from the merge operation
    pub message: String,
}

/// Review event type for PR reviews
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewEvent {
    /// Approve the PR
    Approve,
    /// Request changes
    RequestChanges,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_merge_method_from_str() {
        assert_eq!("merge".parse::<MergeMethod>().unwrap(), MergeMethod::Merge);
        assert_eq!(" Squash ".parse::<MergeMethod>().unwrap(), MergeMethod::Squash);
        assert_eq!("REBASE".parse::<MergeMethod>().unwrap(), MergeMethod::Rebase);
        assert!("fast-forward".parse::<MergeMethod>().is_err());
    }

    #[test]
    fn test_review_event_wire_names() {
        assert_eq!(
            serde_json::to_string(&ReviewEvent::RequestChanges).unwrap(),
            "\"REQUEST_CHANGES\""
        );
        assert_eq!(serde_json::to_string(&ReviewEvent::Approve).unwrap(), "\"APPROVE\"");
    }

    #[test]
    fn test_changed_file_from_api_json() {
        let json = r#"[
            {
                "sha": "bbcd538c8e72b8c175046e27cc8f907076331401",
                "filename": "src/new_name.rs",
                "status": "renamed",
                "additions": 3,
                "deletions": 1,
                "changes": 4,
                "patch": "@@ -1,2 +1,4 @@\n a\n-b\n+c\n+d\n+e",
                "previous_filename": "src/old_name.rs"
            },
            {
                "filename": "assets/logo.png",
                "status": "added",
                "additions": 0,
                "deletions": 0
            }
        ]"#;

        let files: Vec<ChangedFile> = serde_json::from_str(json).unwrap();

        assert_eq!(files[0].status, FileStatus::Renamed);
        assert_eq!(files[0].previous_filename.as_deref(), Some("src/old_name.rs"));
        assert_eq!(files[1].patch, None);
        assert_eq!(files[1].status.as_str(), "added");
    }

    #[test]
    fn test_unknown_file_status_is_tolerated() {
        let file: ChangedFile = serde_json::from_str(
            r#"{"filename": "x", "status": "teleported", "additions": 0, "deletions": 0}"#,
        )
        .unwrap();

        assert_eq!(file.status, FileStatus::Unknown);
    }
}
