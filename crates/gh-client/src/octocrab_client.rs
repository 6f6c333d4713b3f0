//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.
//! Endpoints without a matching octocrab builder are requested as raw routes
//! and deserialized into the private DTOs below.

use crate::client::GitHubClient;
use crate::types::{
    ChangedFile, MergeMethod, MergeResult, PullRequest, PullRequestDetails, PullRequestState,
    Repository, ReviewEvent,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const PER_PAGE: u8 = 100;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }

    /// GET every page of a list route
    async fn get_all_pages<T>(&self, route: &str) -> anyhow::Result<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut items = Vec::new();
        let mut page = 1u32;

        loop {
            let params = PageParams {
                per_page: PER_PAGE,
                page,
            };
            let batch: Vec<T> = self.octocrab.get(route, Some(&params)).await?;
            let is_last = batch.len() < usize::from(PER_PAGE);
            items.extend(batch);

            if is_last {
                break;
            }
            page += 1;
        }

        Ok(items)
    }
}

#[derive(Serialize)]
struct PageParams {
    per_page: u8,
    page: u32,
}

#[derive(Serialize)]
struct ReviewBody<'a> {
    body: &'a str,
    event: ReviewEvent,
}

#[derive(Debug, Deserialize)]
struct RepositoryDto {
    name: String,
    full_name: String,
    #[serde(default)]
    archived: bool,
}

#[derive(Debug, Deserialize)]
struct UserDto {
    login: String,
}

#[derive(Debug, Deserialize)]
struct BranchDto {
    #[serde(rename = "ref")]
    ref_field: String,
    repo: Option<RepositoryDto>,
}

#[derive(Debug, Deserialize)]
struct PullRequestDto {
    number: u64,
    title: Option<String>,
    body: Option<String>,
    user: Option<UserDto>,
    state: String,
    merged_at: Option<DateTime<Utc>>,
    head: BranchDto,
    base: BranchDto,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    mergeable: Option<bool>,
    #[serde(default)]
    comments: u64,
    #[serde(default)]
    commits: u64,
    #[serde(default)]
    changed_files: u64,
    #[serde(default)]
    additions: u64,
    #[serde(default)]
    deletions: u64,
    html_url: String,
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_organization_repositories(&self, org: &str) -> anyhow::Result<Vec<Repository>> {
        debug!("Fetching repositories for organization {}", org);

        let repos: Vec<RepositoryDto> = self.get_all_pages(&format!("/orgs/{}/repos", org)).await?;
        let repos: Vec<Repository> = repos.into_iter().map(convert_repository).collect();

        debug!("Fetched {} repositories for {}", repos.len(), org);
        Ok(repos)
    }

    async fn fetch_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> anyhow::Result<Vec<PullRequest>> {
        debug!("Fetching PRs for {}/{}", owner, repo);

        let mut prs = Vec::new();
        let mut page_num = 1u32;

        loop {
            let pulls = self.octocrab.pulls(owner, repo);
            let page = pulls
                .list()
                .state(octocrab::params::State::Open)
                .per_page(PER_PAGE)
                .page(page_num)
                .send()
                .await?;
            let has_next = page.next.is_some();

            prs.extend(
                page.items
                    .iter()
                    .map(|pr| convert_pull_request(owner, repo, pr)),
            );

            if !has_next {
                break;
            }

            page_num += 1;
        }

        debug!("Fetched {} PRs for {}/{}", prs.len(), owner, repo);
        Ok(prs)
    }

    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<PullRequestDetails> {
        debug!("Fetching PR #{} for {}/{}", pr_number, owner, repo);

        let route = format!("/repos/{}/{}/pulls/{}", owner, repo, pr_number);
        let pr: PullRequestDto = self.octocrab.get(route, None::<&()>).await?;

        Ok(convert_pull_request_details(owner, repo, pr))
    }

    async fn fetch_pull_request_files(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<Vec<ChangedFile>> {
        debug!("Fetching files of PR #{} for {}/{}", pr_number, owner, repo);

        let route = format!("/repos/{}/{}/pulls/{}/files", owner, repo, pr_number);
        let files: Vec<ChangedFile> = self.get_all_pages(&route).await?;

        debug!("Fetched {} files of PR #{}", files.len(), pr_number);
        Ok(files)
    }

    async fn add_comment(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        body: &str,
    ) -> anyhow::Result<()> {
        debug!("Commenting on PR #{} in {}/{}", pr_number, owner, repo);

        self.octocrab
            .issues(owner, repo)
            .create_comment(pr_number, body)
            .await?;

        Ok(())
    }

    async fn create_review(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        event: ReviewEvent,
        body: &str,
    ) -> anyhow::Result<()> {
        debug!(
            "Creating {:?} review on PR #{} in {}/{}",
            event, pr_number, owner, repo
        );

        let route = format!("/repos/{}/{}/pulls/{}/reviews", owner, repo, pr_number);
        let _: serde_json::Value = self
            .octocrab
            .post(route, Some(&ReviewBody { body, event }))
            .await?;

        Ok(())
    }

    async fn merge_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        merge_method: MergeMethod,
        commit_message: Option<&str>,
    ) -> anyhow::Result<MergeResult> {
        debug!(
            "Merging PR #{} in {}/{} via {}",
            pr_number, owner, repo, merge_method
        );

        let pulls = self.octocrab.pulls(owner, repo);
        let mut request = pulls
            .merge(pr_number)
            .method(convert_merge_method(merge_method));

        if let Some(message) = commit_message {
            request = request.message(message);
        }

        let merge = request.send().await?;

        Ok(MergeResult {
            merged: merge.merged,
            sha: merge.sha,
            message: merge.message.unwrap_or_default(),
        })
    }
}

fn convert_repository(repo: RepositoryDto) -> Repository {
    Repository {
        name: repo.name,
        full_name: repo.full_name,
        archived: repo.archived,
    }
}

fn convert_pull_request(
    owner: &str,
    repo: &str,
    pr: &octocrab::models::pulls::PullRequest,
) -> PullRequest {
    PullRequest {
        owner: owner.to_string(),
        repo: repo.to_string(),
        number: pr.number,
        title: pr.title.clone().unwrap_or_default(),
        author: pr
            .user
            .as_ref()
            .map(|u| u.login.clone())
            .unwrap_or_else(|| "unknown".to_string()),
        created_at: pr.created_at.unwrap_or_else(chrono::Utc::now),
        html_url: pr
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_default(),
    }
}

fn convert_pull_request_details(owner: &str, repo: &str, pr: PullRequestDto) -> PullRequestDetails {
    let state = if pr.merged_at.is_some() {
        PullRequestState::Merged
    } else if pr.state == "closed" {
        PullRequestState::Closed
    } else {
        PullRequestState::Open
    };

    PullRequestDetails {
        number: pr.number,
        title: pr.title.unwrap_or_default(),
        body: pr.body.filter(|body| !body.trim().is_empty()),
        author: pr
            .user
            .map(|u| u.login)
            .unwrap_or_else(|| "unknown".to_string()),
        state,
        repository: pr
            .base
            .repo
            .map(|r| r.full_name)
            .unwrap_or_else(|| format!("{}/{}", owner, repo)),
        head_branch: pr.head.ref_field,
        base_branch: pr.base.ref_field,
        created_at: pr.created_at,
        updated_at: pr.updated_at,
        mergeable: pr.mergeable,
        comments: pr.comments,
        commits: pr.commits,
        changed_files: pr.changed_files,
        additions: pr.additions,
        deletions: pr.deletions,
        html_url: pr.html_url,
    }
}

fn convert_merge_method(method: MergeMethod) -> octocrab::params::pulls::MergeMethod {
    use octocrab::params::pulls::MergeMethod as OMM;
    match method {
        MergeMethod::Merge => OMM::Merge,
        MergeMethod::Squash => OMM::Squash,
        MergeMethod::Rebase => OMM::Rebase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PR_JSON: &str = r#"{
        "number": 42,
        "title": "Add split diff view",
        "body": "  ",
        "user": { "login": "octocat" },
        "state": "open",
        "merged_at": null,
        "head": { "ref": "feature/split-diff", "repo": null },
        "base": {
            "ref": "main",
            "repo": { "name": "tui", "full_name": "acme/tui", "archived": false }
        },
        "created_at": "2024-03-01T10:15:00Z",
        "updated_at": "2024-03-02T08:00:30Z",
        "mergeable": null,
        "comments": 3,
        "commits": 5,
        "changed_files": 7,
        "additions": 120,
        "deletions": 14,
        "html_url": "https://github.com/acme/tui/pull/42"
    }"#;

    #[test]
    fn test_convert_pull_request_details() {
        let dto: PullRequestDto = serde_json::from_str(PR_JSON).unwrap();
        let details = convert_pull_request_details("acme", "tui", dto);

        assert_eq!(details.number, 42);
        assert_eq!(details.author, "octocat");
        assert_eq!(details.state, PullRequestState::Open);
        assert_eq!(details.repository, "acme/tui");
        assert_eq!(details.head_branch, "feature/split-diff");
        assert_eq!(details.base_branch, "main");
        assert_eq!(details.mergeable, None);
        assert_eq!(details.body, None);
        assert_eq!(
            (details.commits, details.changed_files, details.additions, details.deletions),
            (5, 7, 120, 14)
        );
    }

    #[test]
    fn test_merged_state_wins_over_closed() {
        let json = PR_JSON
            .replace(r#""state": "open""#, r#""state": "closed""#)
            .replace(r#""merged_at": null"#, r#""merged_at": "2024-03-03T00:00:00Z""#);
        let dto: PullRequestDto = serde_json::from_str(&json).unwrap();

        assert_eq!(
            convert_pull_request_details("acme", "tui", dto).state,
            PullRequestState::Merged
        );
    }

    #[test]
    fn test_missing_base_repo_falls_back_to_route() {
        let json = PR_JSON.replace(
            r#"{ "name": "tui", "full_name": "acme/tui", "archived": false }"#,
            "null",
        );
        let dto: PullRequestDto = serde_json::from_str(&json).unwrap();

        assert_eq!(
            convert_pull_request_details("acme", "tui", dto).repository,
            "acme/tui"
        );
    }

    #[test]
    fn test_review_body_serialization() {
        let body = serde_json::to_value(ReviewBody {
            body: "LGTM",
            event: ReviewEvent::Approve,
        })
        .unwrap();

        assert_eq!(body, serde_json::json!({ "body": "LGTM", "event": "APPROVE" }));
    }
}
