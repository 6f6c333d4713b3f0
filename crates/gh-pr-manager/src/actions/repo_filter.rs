//! Repository filter popup actions

use crate::state::RepoFilterOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoFilterAction {
    Char(char),
    Backspace,
    ClearInput,
    NavigateNext,
    NavigatePrevious,
    /// Apply the highlighted option and close
    Confirm,
    /// Close without changing the filter
    Cancel,
    /// Popup closed with this result
    Dismissed(RepoFilterOutcome),
}
