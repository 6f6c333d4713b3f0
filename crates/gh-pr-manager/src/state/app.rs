//! Application State

use crate::domain_models::SortOrder;
use crate::keymap::{default_keymap, Keymap};
use crate::theme::Theme;
use crate::views::ViewId;
use gh_pr_config::AppConfig;

use super::{
    ConfirmationPopupState, PrDetailState, PrFilesState, PrListState, RepoFilterState,
    StatusBarState,
};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are floating overlays
    /// Views are rendered bottom-up, so the last view in the stack renders on top
    pub view_stack: Vec<ViewId>,
    pub pr_list: PrListState,
    pub pr_detail: PrDetailState,
    pub pr_files: PrFilesState,
    /// Repository filter popup state (present only when popup is shown)
    pub repo_filter: Option<RepoFilterState>,
    /// Confirmation popup state (present only when popup is shown)
    pub confirmation_popup: Option<ConfirmationPopupState>,
    pub status_bar: StatusBarState,
    pub theme: Theme,
    /// The keymap containing all keybindings
    pub keymap: Keymap,
    /// Application configuration
    pub app_config: AppConfig,
}

impl AppState {
    /// Initial state for browsing `organization`
    pub fn new(organization: impl Into<String>, app_config: AppConfig) -> Self {
        let mut state = Self::default();
        state.pr_list.organization = organization.into();
        if app_config.oldest_first {
            state.pr_list.sort_order = SortOrder::OldestFirst;
        }
        state.app_config = app_config;
        state
    }

    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> ViewId {
        self.view_stack.last().copied().unwrap_or(ViewId::PrList)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            view_stack: vec![ViewId::PrList],
            pr_list: PrListState::default(),
            pr_detail: PrDetailState::default(),
            pr_files: PrFilesState::default(),
            repo_filter: None,
            confirmation_popup: None,
            status_bar: StatusBarState::default(),
            theme: Theme::default(),
            keymap: default_keymap(),
            app_config: AppConfig::default(),
        }
    }
}
