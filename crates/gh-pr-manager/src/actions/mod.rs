//! Actions module
//!
//! This module defines all actions in the application using a tagged action architecture.
//! Actions are organized by:
//! - Generic actions (Navigate, TextInput) that the active view translates to screen-specific actions
//! - Global actions that affect the entire application
//! - Screen-specific actions that are already targeted to a particular screen

// Shared action types
pub mod global;
pub mod navigation;
pub mod text_input;

// Screen-specific action types
pub mod confirmation_popup;
pub mod pr_detail;
pub mod pr_files;
pub mod pr_list;
pub mod repo_filter;
pub mod status_bar;

pub use confirmation_popup::ConfirmationPopupAction;
pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use pr_detail::PrDetailAction;
pub use pr_files::PrFilesAction;
pub use pr_list::PrListAction;
pub use repo_filter::RepoFilterAction;
pub use status_bar::StatusBarAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by screen/domain
///
/// Every variant is matched exhaustively somewhere: there is no string-keyed
/// dispatch anywhere in the application.
#[derive(Debug, Clone)]
pub enum Action {
    // Generic actions (need translation by active view)
    /// Generic navigation action - will be translated by active view
    Navigate(NavigationAction),
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),

    // Global actions (no translation needed)
    /// Global application actions
    Global(GlobalAction),

    // Screen-specific actions (already targeted)
    /// Pull request list screen
    PrList(PrListAction),
    /// Pull request detail screen
    PrDetail(PrDetailAction),
    /// Changed files (split diff) screen
    PrFiles(PrFilesAction),
    /// Repository filter popup
    RepoFilter(RepoFilterAction),
    /// Confirmation popup (approve, comment, request changes, merge)
    ConfirmationPopup(ConfirmationPopupAction),
    /// Status bar messages
    StatusBar(StatusBarAction),
}
