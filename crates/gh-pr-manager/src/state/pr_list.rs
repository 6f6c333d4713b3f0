//! Pull request list state

use crate::domain_models::{LoadingState, SortOrder};
use gh_client::PullRequest;

/// State of the organization-wide PR list
#[derive(Debug, Clone, Default)]
pub struct PrListState {
    pub organization: String,
    pub loading: LoadingState,
    /// Every PR of the last successful fetch
    pub pull_requests: Vec<PullRequest>,
    /// `pull_requests` after filtering and sorting
    pub visible: Vec<PullRequest>,
    pub selected: usize,
    pub sort_order: SortOrder,
    /// Exact repository name to show, `None` for all
    pub repo_filter: Option<String>,
}

impl PrListState {
    /// Replace the loaded PRs and rebuild the visible list
    pub fn set_pull_requests(&mut self, pull_requests: Vec<PullRequest>) {
        self.pull_requests = pull_requests;
        self.loading = LoadingState::Loaded;
        self.selected = 0;
        self.refresh_visible();
    }

    /// Rebuild `visible` from `pull_requests`, the filter and the sort order
    pub fn refresh_visible(&mut self) {
        let mut visible: Vec<PullRequest> = self
            .pull_requests
            .iter()
            .filter(|pr| match &self.repo_filter {
                Some(repo) => &pr.repo == repo,
                None => true,
            })
            .cloned()
            .collect();

        visible.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.number.cmp(&b.number))
        });
        if self.sort_order == SortOrder::NewestFirst {
            visible.reverse();
        }

        self.visible = visible;
        self.selected = self.selected.min(self.visible.len().saturating_sub(1));
    }

    pub fn selected_pr(&self) -> Option<&PullRequest> {
        self.visible.get(self.selected)
    }

    /// Distinct repository names of all loaded PRs, sorted
    pub fn repositories(&self) -> Vec<String> {
        let mut repos: Vec<String> = self.pull_requests.iter().map(|pr| pr.repo.clone()).collect();
        repos.sort();
        repos.dedup();
        repos
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible.len().saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::pr;
    use pretty_assertions::assert_eq;

    fn numbers(state: &PrListState) -> Vec<u64> {
        state.visible.iter().map(|pr| pr.number).collect()
    }

    #[test]
    fn test_newest_first_is_the_default_order() {
        let mut state = PrListState::default();
        state.set_pull_requests(vec![pr("api", 1, 1), pr("web", 2, 3), pr("api", 3, 2)]);

        assert_eq!(numbers(&state), vec![2, 3, 1]);
        assert_eq!(state.loading, LoadingState::Loaded);
    }

    #[test]
    fn test_oldest_first_reverses_order() {
        let mut state = PrListState {
            sort_order: SortOrder::OldestFirst,
            ..Default::default()
        };
        state.set_pull_requests(vec![pr("api", 1, 1), pr("web", 2, 3), pr("api", 3, 2)]);

        assert_eq!(numbers(&state), vec![1, 3, 2]);
    }

    #[test]
    fn test_repo_filter_matches_exact_name() {
        let mut state = PrListState {
            repo_filter: Some("api".to_string()),
            ..Default::default()
        };
        state.set_pull_requests(vec![pr("api", 1, 1), pr("api-docs", 2, 3), pr("api", 3, 2)]);

        assert_eq!(numbers(&state), vec![3, 1]);
    }

    #[test]
    fn test_selection_is_clamped_when_list_shrinks() {
        let mut state = PrListState::default();
        state.set_pull_requests(vec![pr("api", 1, 1), pr("web", 2, 3), pr("api", 3, 2)]);
        state.select_last();
        assert_eq!(state.selected, 2);

        state.repo_filter = Some("web".to_string());
        state.refresh_visible();

        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_pr().map(|pr| pr.number), Some(2));
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut state = PrListState::default();
        state.set_pull_requests(vec![pr("api", 1, 1), pr("web", 2, 3)]);

        state.select_previous();
        assert_eq!(state.selected, 0);
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_repositories_are_distinct_and_sorted() {
        let mut state = PrListState::default();
        state.set_pull_requests(vec![pr("web", 1, 1), pr("api", 2, 3), pr("web", 3, 2)]);

        assert_eq!(state.repositories(), vec!["api", "web"]);
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let mut state = PrListState::default();
        state.set_pull_requests(Vec::new());

        assert!(state.selected_pr().is_none());
        state.select_next();
        assert_eq!(state.selected, 0);
    }
}
