//! Pull request detail state

use crate::domain_models::{LoadingState, PrKey};
use gh_client::{PullRequest, PullRequestDetails};

/// State of the detail screen
#[derive(Debug, Clone, Default)]
pub struct PrDetailState {
    /// PR the screen was opened for
    pub target: Option<PrKey>,
    /// List entry of the target, shown while details load
    pub summary: Option<PullRequest>,
    pub loading: LoadingState,
    pub details: Option<PullRequestDetails>,
    pub scroll: u16,
    /// Number of lines of the rendered details
    pub content_height: u16,
}

impl PrDetailState {
    /// Reset for a freshly opened PR
    pub fn open(pr: &PullRequest) -> Self {
        Self {
            target: Some(PrKey::from(pr)),
            summary: Some(pr.clone()),
            loading: LoadingState::Loading,
            ..Default::default()
        }
    }

    /// Whether a result for `key` belongs to what is on screen
    pub fn is_current(&self, key: &PrKey) -> bool {
        self.target.as_ref() == Some(key)
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.content_height {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.content_height.saturating_sub(1);
    }
}
