//! Application State Module
//!
//! Contains all state types used by the application, organized by screen.

mod app;
mod confirmation_popup;
mod pr_detail;
mod pr_files;
mod pr_list;
mod repo_filter;
mod status_bar;

pub use app::AppState;
pub use confirmation_popup::{ConfirmationIntent, ConfirmationPopupState};
pub use pr_detail::PrDetailState;
pub use pr_files::{PrFilesState, FILES_PAGE_SIZE};
pub use pr_list::PrListState;
pub use repo_filter::{RepoFilterOutcome, RepoFilterState, RepoOption};
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
