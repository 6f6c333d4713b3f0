//! Confirmation popup actions

use crate::state::ConfirmationIntent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationPopupAction {
    /// Open the popup for the PR shown in the detail view
    Show(ConfirmationIntent),
    Char(char),
    Backspace,
    ClearInput,
    /// Submit; ignored while the message is invalid
    Confirm,
    Cancel,
}
