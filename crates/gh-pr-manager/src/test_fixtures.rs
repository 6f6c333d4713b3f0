//! Sample GitHub data shared by unit tests

use chrono::{TimeZone, Utc};
use gh_client::{ChangedFile, FileStatus, PullRequest, PullRequestDetails, PullRequestState};

/// Open PR in `acme/<repo>` created on March `day`, 2024
pub(crate) fn pr(repo: &str, number: u64, day: u32) -> PullRequest {
    PullRequest {
        owner: "acme".to_string(),
        repo: repo.to_string(),
        number,
        title: format!("Change {number}"),
        author: "octocat".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
        html_url: format!("https://github.com/acme/{repo}/pull/{number}"),
    }
}

pub(crate) fn details(number: u64) -> PullRequestDetails {
    PullRequestDetails {
        number,
        title: "Add retry to webhook delivery".to_string(),
        body: Some("Retries failed deliveries.\nUp to three times.".to_string()),
        author: "octocat".to_string(),
        state: PullRequestState::Open,
        repository: "acme/api".to_string(),
        head_branch: "feature/retry".to_string(),
        base_branch: "main".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 3, 2, 17, 5, 9).unwrap(),
        mergeable: Some(true),
        comments: 2,
        commits: 3,
        changed_files: 2,
        additions: 12,
        deletions: 4,
        html_url: format!("https://github.com/acme/api/pull/{number}"),
    }
}

pub(crate) fn changed_file(filename: &str, patch: Option<&str>) -> ChangedFile {
    ChangedFile {
        filename: filename.to_string(),
        status: FileStatus::Modified,
        additions: 1,
        deletions: 1,
        patch: patch.map(str::to_string),
        previous_filename: None,
    }
}
