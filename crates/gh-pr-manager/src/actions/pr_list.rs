//! Pull request list actions

use gh_client::PullRequest;

#[derive(Debug, Clone)]
pub enum PrListAction {
    /// Fetch every open PR of the organization again
    Reload,
    /// Fetch finished
    Loaded(Vec<PullRequest>),
    /// Fetch failed
    LoadError(String),
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,
    /// Flip between newest and oldest first
    ToggleSortOrder,
    /// Drop the repository filter
    ClearFilters,
    /// Open the repository filter popup
    OpenRepoFilter,
    /// Open the detail view of the selected PR
    OpenSelected,
}
