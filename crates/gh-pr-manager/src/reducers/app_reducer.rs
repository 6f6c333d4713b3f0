use crate::actions::{Action, GlobalAction};
use crate::reducers::{
    confirmation_popup_reducer, pr_detail_reducer, pr_files_reducer, pr_list_reducer, push_view,
    repo_filter_reducer, status_bar_reducer,
};
use crate::state::AppState;
use crate::views::ViewId;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => reduce_global(state, global),
        // Generic actions are translated by middleware; untranslated ones are dropped
        Action::Navigate(_) | Action::TextInput(_) => state,
        Action::PrList(action) => pr_list_reducer::reduce(state, action),
        Action::PrDetail(action) => pr_detail_reducer::reduce(state, action),
        Action::PrFiles(action) => {
            state.pr_files =
                pr_files_reducer::reduce(std::mem::take(&mut state.pr_files), action, &state.theme);
            state
        }
        Action::RepoFilter(action) => repo_filter_reducer::reduce(state, action),
        Action::ConfirmationPopup(action) => confirmation_popup_reducer::reduce(state, action),
        Action::StatusBar(action) => {
            state.status_bar = status_bar_reducer::reduce(state.status_bar, action);
            state
        }
    }
}

fn reduce_global(mut state: AppState, action: &GlobalAction) -> AppState {
    match action {
        GlobalAction::Quit => {
            state.running = false;
        }
        GlobalAction::PushView(view) => push_view(&mut state, *view),
        GlobalAction::Close => {
            // Close the top-most view; closing the last one quits
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                match popped {
                    Some(ViewId::RepoFilter) => state.repo_filter = None,
                    Some(ViewId::ConfirmationPopup) => state.confirmation_popup = None,
                    _ => {}
                }
                log::debug!("Closed view: {:?}", popped);
            } else {
                log::debug!("Closing last view - quitting application");
                state.running = false;
            }
        }
        // Consumed by the keyboard middleware
        GlobalAction::KeyPressed(_) => {}
    }
    state
}
