use gh_client::PullRequest;
use std::fmt;

/// Identifies one pull request across repositories
///
/// Results of background fetches carry the key they were requested for,
/// so a late answer for a PR the user already left can be dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrKey {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

impl From<&PullRequest> for PrKey {
    fn from(pr: &PullRequest) -> Self {
        Self {
            owner: pr.owner.clone(),
            repo: pr.repo.clone(),
            number: pr.number,
        }
    }
}

impl fmt::Display for PrKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}
