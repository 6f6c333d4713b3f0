//! Command identifiers
//!
//! Commands are the semantic actions users can trigger from the keyboard.
//! Keybindings refer to them by ID; views decide which ones they accept.

use crate::actions::{
    Action, ConfirmationPopupAction, GlobalAction, NavigationAction, PrDetailAction, PrListAction,
};
use crate::state::ConfirmationIntent;

/// Unique identifier for each command in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    // === Navigation ===
    /// Navigate to the next item (down)
    NavigateNext,
    /// Navigate to the previous item (up)
    NavigatePrevious,
    /// Jump to the first item
    NavigateToTop,
    /// Jump to the last item
    NavigateToBottom,

    // === Scrolling ===
    ScrollPageDown,
    ScrollPageUp,

    // === PR list ===
    /// Open the detail view of the selected PR
    PrOpenDetails,
    /// Fetch all PRs again
    PrReload,
    /// Toggle newest / oldest first
    PrToggleOrder,
    /// Open the repository filter
    PrFilterRepository,
    /// Drop all filters
    PrClearFilters,

    // === PR detail ===
    /// Show changed files with split diffs
    PrViewFiles,
    PrApprove,
    PrComment,
    PrRequestChanges,
    PrMerge,

    // === General ===
    /// Close the current view
    GlobalClose,
    /// Quit the application
    GlobalQuit,
}

impl CommandId {
    /// Convert this command ID to an Action
    pub fn to_action(self) -> Action {
        match self {
            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::NavigateToTop => Action::Navigate(NavigationAction::ToTop),
            Self::NavigateToBottom => Action::Navigate(NavigationAction::ToBottom),
            Self::ScrollPageDown => Action::Navigate(NavigationAction::PageDown),
            Self::ScrollPageUp => Action::Navigate(NavigationAction::PageUp),

            Self::PrOpenDetails => Action::PrList(PrListAction::OpenSelected),
            Self::PrReload => Action::PrList(PrListAction::Reload),
            Self::PrToggleOrder => Action::PrList(PrListAction::ToggleSortOrder),
            Self::PrFilterRepository => Action::PrList(PrListAction::OpenRepoFilter),
            Self::PrClearFilters => Action::PrList(PrListAction::ClearFilters),

            Self::PrViewFiles => Action::PrDetail(PrDetailAction::ViewFiles),
            Self::PrApprove => show_confirmation(ConfirmationIntent::Approve),
            Self::PrComment => show_confirmation(ConfirmationIntent::Comment),
            Self::PrRequestChanges => show_confirmation(ConfirmationIntent::RequestChanges),
            Self::PrMerge => show_confirmation(ConfirmationIntent::Merge),

            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Short label for key hints
    pub fn description(&self) -> &'static str {
        match self {
            Self::NavigateNext => "Down",
            Self::NavigatePrevious => "Up",
            Self::NavigateToTop => "Top",
            Self::NavigateToBottom => "Bottom",
            Self::ScrollPageDown => "Page down",
            Self::ScrollPageUp => "Page up",
            Self::PrOpenDetails => "Details",
            Self::PrReload => "Reload",
            Self::PrToggleOrder => "Order",
            Self::PrFilterRepository => "Filter repo",
            Self::PrClearFilters => "Clear filters",
            Self::PrViewFiles => "Files",
            Self::PrApprove => "Approve",
            Self::PrComment => "Comment",
            Self::PrRequestChanges => "Request changes",
            Self::PrMerge => "Merge",
            Self::GlobalClose => "Back",
            Self::GlobalQuit => "Quit",
        }
    }
}

fn show_confirmation(intent: ConfirmationIntent) -> Action {
    Action::ConfirmationPopup(ConfirmationPopupAction::Show(intent))
}
