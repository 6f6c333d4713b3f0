//! Pull request detail actions

use crate::domain_models::PrKey;
use gh_client::PullRequestDetails;

#[derive(Debug, Clone)]
pub enum PrDetailAction {
    /// Details for `PrKey` arrived
    Loaded(PrKey, Box<PullRequestDetails>),
    /// Details for `PrKey` could not be fetched
    LoadError(PrKey, String),
    ScrollDown,
    ScrollUp,
    ScrollToTop,
    ScrollToBottom,
    /// Open the changed files of the shown PR
    ViewFiles,
}
