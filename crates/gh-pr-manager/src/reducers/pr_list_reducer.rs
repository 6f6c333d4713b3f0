//! Pull request list reducer

use crate::actions::PrListAction;
use crate::domain_models::LoadingState;
use crate::reducers::push_view;
use crate::state::{AppState, PrDetailState, RepoFilterState};
use crate::views::ViewId;

pub fn reduce(mut state: AppState, action: &PrListAction) -> AppState {
    let list = &mut state.pr_list;
    match action {
        PrListAction::Reload => {
            list.loading = LoadingState::Loading;
            list.repo_filter = None;
        }
        PrListAction::Loaded(pull_requests) => {
            log::info!("Loaded {} pull requests", pull_requests.len());
            list.set_pull_requests(pull_requests.clone());
        }
        PrListAction::LoadError(error) => {
            list.loading = LoadingState::Error(error.clone());
            list.pull_requests.clear();
            list.refresh_visible();
        }
        PrListAction::NavigateNext => list.select_next(),
        PrListAction::NavigatePrevious => list.select_previous(),
        PrListAction::NavigateToTop => list.selected = 0,
        PrListAction::NavigateToBottom => list.select_last(),
        PrListAction::ToggleSortOrder => {
            list.sort_order = list.sort_order.toggled();
            list.refresh_visible();
        }
        PrListAction::ClearFilters => {
            list.repo_filter = None;
            list.refresh_visible();
        }
        PrListAction::OpenRepoFilter => {
            let repositories = list.repositories();
            if list.loading != LoadingState::Loaded || repositories.is_empty() {
                log::debug!("No repositories to filter by");
            } else {
                state.repo_filter = Some(RepoFilterState::new(repositories));
                push_view(&mut state, ViewId::RepoFilter);
            }
        }
        PrListAction::OpenSelected => {
            if let Some(pr) = list.selected_pr() {
                state.pr_detail = PrDetailState::open(pr);
                push_view(&mut state, ViewId::PrDetail);
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{PrKey, SortOrder};
    use crate::test_fixtures::pr;
    use pretty_assertions::assert_eq;

    fn loaded() -> AppState {
        reduce(
            AppState::default(),
            &PrListAction::Loaded(vec![pr("api", 1, 1), pr("web", 2, 3), pr("api", 3, 2)]),
        )
    }

    #[test]
    fn test_reload_clears_repository_filter() {
        let mut state = loaded();
        state.pr_list.repo_filter = Some("api".to_string());

        let state = reduce(state, &PrListAction::Reload);

        assert_eq!(state.pr_list.loading, LoadingState::Loading);
        assert_eq!(state.pr_list.repo_filter, None);
    }

    #[test]
    fn test_load_error_replaces_list() {
        let state = reduce(loaded(), &PrListAction::LoadError("rate limited".into()));

        assert_eq!(
            state.pr_list.loading,
            LoadingState::Error("rate limited".to_string())
        );
        assert!(state.pr_list.visible.is_empty());
    }

    #[test]
    fn test_toggle_sort_order() {
        let state = reduce(loaded(), &PrListAction::ToggleSortOrder);

        assert_eq!(state.pr_list.sort_order, SortOrder::OldestFirst);
        assert_eq!(state.pr_list.visible[0].number, 1);
    }

    #[test]
    fn test_open_selected_pushes_detail_for_selected_pr() {
        let state = reduce(loaded(), &PrListAction::NavigateNext);
        let state = reduce(state, &PrListAction::OpenSelected);

        assert_eq!(state.view_stack, vec![ViewId::PrList, ViewId::PrDetail]);
        assert_eq!(
            state.pr_detail.target,
            Some(PrKey {
                owner: "acme".to_string(),
                repo: "api".to_string(),
                number: 3,
            })
        );
        assert_eq!(state.pr_detail.loading, LoadingState::Loading);
    }

    #[test]
    fn test_open_selected_on_empty_list_does_nothing() {
        let state = reduce(AppState::default(), &PrListAction::OpenSelected);

        assert_eq!(state.view_stack, vec![ViewId::PrList]);
        assert!(state.pr_detail.target.is_none());
    }

    #[test]
    fn test_open_repo_filter_lists_loaded_repositories() {
        let state = reduce(loaded(), &PrListAction::OpenRepoFilter);

        assert_eq!(state.active_view(), ViewId::RepoFilter);
        assert_eq!(
            state.repo_filter.map(|filter| filter.repositories),
            Some(vec!["api".to_string(), "web".to_string()])
        );
    }

    #[test]
    fn test_repo_filter_waits_for_reload() {
        let reloading = reduce(loaded(), &PrListAction::Reload);

        let state = reduce(reloading, &PrListAction::OpenRepoFilter);

        assert_eq!(state.active_view(), ViewId::PrList);
    }

    #[test]
    fn test_repo_filter_needs_loaded_repositories() {
        let loading = reduce(AppState::default(), &PrListAction::Reload);
        let state = reduce(loading, &PrListAction::OpenRepoFilter);
        assert_eq!(state.active_view(), ViewId::PrList);
        assert!(state.repo_filter.is_none());

        let failed = reduce(state, &PrListAction::LoadError("offline".to_string()));
        let state = reduce(failed, &PrListAction::OpenRepoFilter);
        assert_eq!(state.view_stack, vec![ViewId::PrList]);
        assert!(state.repo_filter.is_none());
    }
}
