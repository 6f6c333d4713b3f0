//! Pull request detail reducer

use crate::actions::PrDetailAction;
use crate::domain_models::LoadingState;
use crate::reducers::push_view;
use crate::state::{AppState, PrFilesState};
use crate::view_models::pr_detail::detail_lines;
use crate::views::ViewId;

pub fn reduce(mut state: AppState, action: &PrDetailAction) -> AppState {
    let detail = &mut state.pr_detail;
    match action {
        PrDetailAction::Loaded(key, details) => {
            if !detail.is_current(key) {
                log::debug!("Dropping details of {key}, no longer shown");
                return state;
            }
            let height = detail_lines(details, &state.theme).len();
            detail.content_height = u16::try_from(height).unwrap_or(u16::MAX);
            detail.details = Some(details.as_ref().clone());
            detail.loading = LoadingState::Loaded;
        }
        PrDetailAction::LoadError(key, error) => {
            if detail.is_current(key) {
                detail.loading = LoadingState::Error(error.clone());
            }
        }
        PrDetailAction::ScrollDown => detail.scroll_down(),
        PrDetailAction::ScrollUp => detail.scroll_up(),
        PrDetailAction::ScrollToTop => detail.scroll = 0,
        PrDetailAction::ScrollToBottom => detail.scroll_to_bottom(),
        PrDetailAction::ViewFiles => {
            if let Some(target) = detail.target.clone() {
                state.pr_files = PrFilesState::open(target);
                push_view(&mut state, ViewId::PrFiles);
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::PrKey;
    use crate::state::PrDetailState;
    use crate::test_fixtures::{details, pr};
    use pretty_assertions::assert_eq;

    fn opened() -> AppState {
        let mut state = AppState::default();
        state.pr_detail = PrDetailState::open(&pr("api", 12, 1));
        state.view_stack.push(ViewId::PrDetail);
        state
    }

    fn key(number: u64) -> PrKey {
        PrKey {
            owner: "acme".to_string(),
            repo: "api".to_string(),
            number,
        }
    }

    #[test]
    fn test_loaded_details_for_current_pr() {
        let state = reduce(
            opened(),
            &PrDetailAction::Loaded(key(12), Box::new(details(12))),
        );

        assert_eq!(state.pr_detail.loading, LoadingState::Loaded);
        assert_eq!(state.pr_detail.details.map(|d| d.number), Some(12));
        assert!(state.pr_detail.content_height > 15);
    }

    #[test]
    fn test_stale_results_are_dropped() {
        let state = reduce(
            opened(),
            &PrDetailAction::Loaded(key(99), Box::new(details(99))),
        );
        assert_eq!(state.pr_detail.loading, LoadingState::Loading);
        assert!(state.pr_detail.details.is_none());

        let state = reduce(state, &PrDetailAction::LoadError(key(99), "gone".into()));
        assert_eq!(state.pr_detail.loading, LoadingState::Loading);
    }

    #[test]
    fn test_scrolling_stops_at_content_end() {
        let mut state = reduce(
            opened(),
            &PrDetailAction::Loaded(key(12), Box::new(details(12))),
        );
        let last = state.pr_detail.content_height - 1;

        state = reduce(state, &PrDetailAction::ScrollToBottom);
        assert_eq!(state.pr_detail.scroll, last);
        state = reduce(state, &PrDetailAction::ScrollDown);
        assert_eq!(state.pr_detail.scroll, last);
        state = reduce(state, &PrDetailAction::ScrollUp);
        assert_eq!(state.pr_detail.scroll, last - 1);
        state = reduce(state, &PrDetailAction::ScrollToTop);
        assert_eq!(state.pr_detail.scroll, 0);
    }

    #[test]
    fn test_view_files_opens_files_for_target() {
        let state = reduce(opened(), &PrDetailAction::ViewFiles);

        assert_eq!(state.active_view(), ViewId::PrFiles);
        assert_eq!(state.pr_files.target, Some(key(12)));
        assert_eq!(state.pr_files.loading, LoadingState::Loading);
    }
}
