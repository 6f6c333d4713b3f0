//! Reducers - pure functions from (state, action) to the next state

pub mod app_reducer;
pub mod confirmation_popup_reducer;
pub mod pr_detail_reducer;
pub mod pr_files_reducer;
pub mod pr_list_reducer;
pub mod repo_filter_reducer;
pub mod status_bar_reducer;

use crate::state::AppState;
use crate::views::ViewId;

/// Pop `view` if it is the top-most view
pub(crate) fn pop_view(state: &mut AppState, view: ViewId) {
    if state.view_stack.len() > 1 && state.view_stack.last() == Some(&view) {
        state.view_stack.pop();
    }
}

/// Push `view` unless it is already on top
pub(crate) fn push_view(state: &mut AppState, view: ViewId) {
    if state.view_stack.last() != Some(&view) {
        log::debug!("Pushing view onto stack: {:?}", view);
        state.view_stack.push(view);
    }
}
