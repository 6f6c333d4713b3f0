//! Confirmation Popup State
//!
//! State for the popup that confirms a write operation on the PR shown in the
//! detail view, with an editable message.

use crate::domain_models::PrKey;

/// The intent of the confirmation - determines what happens on confirm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationIntent {
    Approve,
    Comment,
    RequestChanges,
    Merge,
}

impl ConfirmationIntent {
    /// Verb shown in the status bar while the operation runs
    pub fn action_verb(&self) -> &'static str {
        match self {
            Self::Approve => "Approving",
            Self::Comment => "Commenting on",
            Self::RequestChanges => "Requesting changes on",
            Self::Merge => "Merging",
        }
    }

    pub fn popup_title(&self) -> &'static str {
        match self {
            Self::Approve => "Approve Pull Request",
            Self::Comment => "Comment on Pull Request",
            Self::RequestChanges => "Request Changes",
            Self::Merge => "Merge Pull Request",
        }
    }

    pub fn instructions(&self) -> &'static str {
        match self {
            Self::Approve => "Enter your approval message:",
            Self::Comment => "Enter your comment:",
            Self::RequestChanges => "Enter your change request message:",
            Self::Merge => "Enter a commit message (optional):",
        }
    }

    /// Comments and change requests need a message
    pub fn requires_input(&self) -> bool {
        matches!(self, Self::Comment | Self::RequestChanges)
    }
}

/// State for the confirmation popup
#[derive(Debug, Clone)]
pub struct ConfirmationPopupState {
    pub intent: ConfirmationIntent,
    /// PR the operation applies to
    pub target: PrKey,
    /// The message input value (user-editable)
    pub input_value: String,
    /// Set after a rejected confirm, cleared by typing
    pub show_validation: bool,
}

impl ConfirmationPopupState {
    pub fn new(intent: ConfirmationIntent, target: PrKey, default_message: String) -> Self {
        Self {
            intent,
            target,
            input_value: default_message,
            show_validation: false,
        }
    }

    /// e.g. "acme/api#12"
    pub fn target_info(&self) -> String {
        self.target.to_string()
    }

    /// Check if the form is valid for submission
    pub fn is_valid(&self) -> bool {
        !self.intent.requires_input() || !self.input_value.trim().is_empty()
    }

    /// Trimmed message, `None` when blank
    pub fn message(&self) -> Option<&str> {
        let message = self.input_value.trim();
        (!message.is_empty()).then_some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn target() -> PrKey {
        PrKey {
            owner: "acme".to_string(),
            repo: "api".to_string(),
            number: 12,
        }
    }

    #[test]
    fn test_target_info() {
        let state = ConfirmationPopupState::new(ConfirmationIntent::Merge, target(), String::new());
        assert_eq!(state.target_info(), "acme/api#12");
    }

    #[test]
    fn test_requires_input() {
        assert!(!ConfirmationIntent::Approve.requires_input());
        assert!(ConfirmationIntent::Comment.requires_input());
        assert!(ConfirmationIntent::RequestChanges.requires_input());
        assert!(!ConfirmationIntent::Merge.requires_input());
    }

    #[test]
    fn test_is_valid() {
        let blank = ConfirmationPopupState::new(ConfirmationIntent::Comment, target(), "  ".into());
        let filled =
            ConfirmationPopupState::new(ConfirmationIntent::Comment, target(), "LGTM".into());
        let approve = ConfirmationPopupState::new(ConfirmationIntent::Approve, target(), "".into());

        assert!(!blank.is_valid());
        assert!(filled.is_valid());
        assert!(approve.is_valid());
    }

    #[test]
    fn test_message_is_trimmed() {
        let state =
            ConfirmationPopupState::new(ConfirmationIntent::Merge, target(), " Ship it \n".into());
        assert_eq!(state.message(), Some("Ship it"));

        let blank = ConfirmationPopupState::new(ConfirmationIntent::Merge, target(), " ".into());
        assert_eq!(blank.message(), None);
    }
}
