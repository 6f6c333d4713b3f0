//! Changed files state

use crate::domain_models::{LoadingState, PrKey};
use crate::view_models::DocumentLine;
use gh_client::ChangedFile;

/// Lines moved by PageUp / PageDown
pub const FILES_PAGE_SIZE: usize = 20;

/// State of the changed files screen
#[derive(Debug, Clone, Default)]
pub struct PrFilesState {
    pub target: Option<PrKey>,
    pub loading: LoadingState,
    pub files: Vec<ChangedFile>,
    /// Rendered per-file sections of `files`, built once on load
    pub body: Vec<DocumentLine>,
    /// Line number column width fitting every diff row in `body`
    pub number_width: u16,
    /// First document line on screen
    pub scroll: usize,
    /// Total number of document lines
    pub document_height: usize,
}

impl PrFilesState {
    pub fn open(target: PrKey) -> Self {
        Self {
            target: Some(target),
            loading: LoadingState::Loading,
            ..Default::default()
        }
    }

    pub fn is_current(&self, key: &PrKey) -> bool {
        self.target.as_ref() == Some(key)
    }

    fn max_scroll(&self) -> usize {
        self.document_height.saturating_sub(1)
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scrolling_is_bounded_by_document() {
        let mut state = PrFilesState {
            document_height: 30,
            ..Default::default()
        };

        state.scroll_down(FILES_PAGE_SIZE);
        assert_eq!(state.scroll, 20);
        state.scroll_down(FILES_PAGE_SIZE);
        assert_eq!(state.scroll, 29);
        state.scroll_up(FILES_PAGE_SIZE);
        assert_eq!(state.scroll, 9);
        state.scroll_up(FILES_PAGE_SIZE);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_empty_document_never_scrolls() {
        let mut state = PrFilesState::default();

        state.scroll_down(1);
        state.scroll_to_bottom();

        assert_eq!(state.scroll, 0);
    }
}
