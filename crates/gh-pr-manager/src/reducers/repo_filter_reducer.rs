//! Repository filter popup reducer

use crate::actions::RepoFilterAction;
use crate::reducers::pop_view;
use crate::state::{AppState, RepoFilterOutcome};
use crate::views::ViewId;

pub fn reduce(mut state: AppState, action: &RepoFilterAction) -> AppState {
    match action {
        RepoFilterAction::Confirm => {
            let outcome = state
                .repo_filter
                .as_ref()
                .map(|filter| filter.outcome())
                .unwrap_or(RepoFilterOutcome::Cancelled);
            return reduce(state, &RepoFilterAction::Dismissed(outcome));
        }
        RepoFilterAction::Cancel => {
            return reduce(
                state,
                &RepoFilterAction::Dismissed(RepoFilterOutcome::Cancelled),
            );
        }
        RepoFilterAction::Dismissed(outcome) => {
            state.repo_filter = None;
            pop_view(&mut state, ViewId::RepoFilter);
            log::debug!("Repository filter closed: {:?}", outcome);

            let list = &mut state.pr_list;
            match outcome {
                RepoFilterOutcome::Selected(repo) => list.repo_filter = Some(repo.clone()),
                RepoFilterOutcome::AllRepositories => list.repo_filter = None,
                RepoFilterOutcome::Cancelled => return state,
            }
            list.selected = 0;
            list.refresh_visible();
        }
        _ => {
            if let Some(filter) = state.repo_filter.as_mut() {
                match action {
                    RepoFilterAction::Char(c) => filter.push_char(*c),
                    RepoFilterAction::Backspace => filter.backspace(),
                    RepoFilterAction::ClearInput => filter.clear_query(),
                    RepoFilterAction::NavigateNext => filter.select_next(),
                    RepoFilterAction::NavigatePrevious => filter.select_previous(),
                    _ => {}
                }
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::PrListAction;
    use crate::reducers::pr_list_reducer;
    use crate::test_fixtures::pr;
    use pretty_assertions::assert_eq;

    fn with_popup() -> AppState {
        let state = pr_list_reducer::reduce(
            AppState::default(),
            &PrListAction::Loaded(vec![pr("api", 1, 1), pr("web", 2, 3), pr("api", 3, 2)]),
        );
        pr_list_reducer::reduce(state, &PrListAction::OpenRepoFilter)
    }

    fn type_text(mut state: AppState, text: &str) -> AppState {
        for c in text.chars() {
            state = reduce(state, &RepoFilterAction::Char(c));
        }
        state
    }

    #[test]
    fn test_confirm_selected_repository() {
        let state = type_text(with_popup(), "WE");
        let state = reduce(state, &RepoFilterAction::NavigateNext);

        let state = reduce(state, &RepoFilterAction::Confirm);

        assert_eq!(state.view_stack, vec![ViewId::PrList]);
        assert!(state.repo_filter.is_none());
        assert_eq!(state.pr_list.repo_filter, Some("web".to_string()));
        assert_eq!(state.pr_list.visible.len(), 1);
    }

    #[test]
    fn test_confirm_all_repositories_clears_filter() {
        let mut state = with_popup();
        state.pr_list.repo_filter = Some("web".to_string());

        let state = reduce(state, &RepoFilterAction::Confirm);

        assert_eq!(state.pr_list.repo_filter, None);
        assert_eq!(state.pr_list.visible.len(), 3);
    }

    #[test]
    fn test_cancel_keeps_filter() {
        let mut state = with_popup();
        state.pr_list.repo_filter = Some("api".to_string());

        let state = reduce(type_text(state, "web"), &RepoFilterAction::Cancel);

        assert_eq!(state.view_stack, vec![ViewId::PrList]);
        assert_eq!(state.pr_list.repo_filter, Some("api".to_string()));
    }

    #[test]
    fn test_typing_edits_query() {
        let state = type_text(with_popup(), "apx");
        let state = reduce(state, &RepoFilterAction::Backspace);

        assert_eq!(state.repo_filter.as_ref().map(|f| f.query.as_str()), Some("ap"));

        let state = reduce(state, &RepoFilterAction::ClearInput);
        assert_eq!(state.repo_filter.map(|f| f.query), Some(String::new()));
    }
}
