//! Changed files reducer

use crate::actions::PrFilesAction;
use crate::domain_models::LoadingState;
use crate::state::{PrFilesState, FILES_PAGE_SIZE};
use crate::theme::Theme;
use crate::view_models::pr_files::{diff_rows, file_lines, HEADER_HEIGHT};
use gh_split_diff::number_width;

/// `theme` styles the file sections, which are laid out here once instead
/// of on every frame.
pub fn reduce(mut state: PrFilesState, action: &PrFilesAction, theme: &Theme) -> PrFilesState {
    match action {
        PrFilesAction::Loaded(key, files) => {
            if state.is_current(key) {
                state.body = file_lines(files, theme);
                state.number_width = number_width(diff_rows(&state.body));
                state.document_height = HEADER_HEIGHT + state.body.len();
                state.files = files.clone();
                state.loading = LoadingState::Loaded;
                state.scroll = 0;
            }
        }
        PrFilesAction::LoadError(key, error) => {
            if state.is_current(key) {
                state.loading = LoadingState::Error(error.clone());
                state.body.clear();
                state.document_height = 0;
                state.scroll = 0;
            }
        }
        PrFilesAction::ScrollDown => state.scroll_down(1),
        PrFilesAction::ScrollUp => state.scroll_up(1),
        PrFilesAction::PageDown => state.scroll_down(FILES_PAGE_SIZE),
        PrFilesAction::PageUp => state.scroll_up(FILES_PAGE_SIZE),
        PrFilesAction::ScrollToTop => state.scroll = 0,
        PrFilesAction::ScrollToBottom => state.scroll_to_bottom(),
    }
    state
}
