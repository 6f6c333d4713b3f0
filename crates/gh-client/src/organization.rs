//! Organization-wide pull request listing
//!
//! GitHub has no endpoint for "all open PRs of an organization", so this
//! lists the repositories first and then fans out one request per repository.

use crate::client::GitHubClient;
use crate::types::PullRequest;
use anyhow::Context;
use log::{debug, warn};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Upper bound of repository requests in flight at once
const MAX_CONCURRENT_REQUESTS: usize = 8;

/// Fetch the open pull requests of every repository in `org`
///
/// Failing to list the repositories is an error. A repository whose pull
/// requests cannot be fetched is logged and skipped, so one broken or
/// inaccessible repository does not hide the rest.
///
/// The result is ordered by repository name, then newest PR number first.
pub async fn fetch_organization_pull_requests(
    client: Arc<dyn GitHubClient>,
    org: &str,
) -> anyhow::Result<Vec<PullRequest>> {
    let repos = client
        .fetch_organization_repositories(org)
        .await
        .with_context(|| format!("Failed to list repositories of '{}'", org))?;

    debug!("Loading open PRs of {} repositories in {}", repos.len(), org);

    let limit = Arc::new(Semaphore::new(MAX_CONCURRENT_REQUESTS));
    let mut tasks = JoinSet::new();

    for repo in repos {
        let client = Arc::clone(&client);
        let limit = Arc::clone(&limit);
        let owner = org.to_string();

        tasks.spawn(async move {
            let _permit = limit.acquire_owned().await;
            let result = client.fetch_pull_requests(&owner, &repo.name).await;
            (repo.name, result)
        });
    }

    let mut prs = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((_, Ok(repo_prs))) => prs.extend(repo_prs),
            Ok((repo, Err(e))) => warn!("Skipping {}/{}: {:#}", org, repo, e),
            Err(e) => warn!("PR fetch task for {} did not finish: {}", org, e),
        }
    }

    prs.sort_by(|a, b| a.repo.cmp(&b.repo).then(b.number.cmp(&a.number)));

    debug!("Loaded {} open PRs in {}", prs.len(), org);
    Ok(prs)
}
