//! Confirmation Popup Reducer
//!
//! Handles all state changes for the confirmation popup, including
//! view stack management and text input.

use crate::actions::ConfirmationPopupAction;
use crate::reducers::{pop_view, push_view};
use crate::state::{AppState, ConfirmationIntent, ConfirmationPopupState};
use crate::views::ViewId;

pub fn reduce(mut state: AppState, action: &ConfirmationPopupAction) -> AppState {
    match action {
        ConfirmationPopupAction::Show(intent) => {
            let Some(target) = state.pr_detail.target.clone() else {
                log::warn!("No pull request to {:?}", intent);
                return state;
            };
            let config = &state.app_config;
            let default_message = match intent {
                ConfirmationIntent::Approve => config.approval_message.clone(),
                ConfirmationIntent::Comment => config.comment_message.clone(),
                ConfirmationIntent::RequestChanges => config.request_changes_message.clone(),
                ConfirmationIntent::Merge => String::new(),
            };
            state.confirmation_popup =
                Some(ConfirmationPopupState::new(*intent, target, default_message));
            push_view(&mut state, ViewId::ConfirmationPopup);
            log::debug!("Showing confirmation popup: {:?}", intent);
        }

        ConfirmationPopupAction::Confirm => {
            // The GitHub middleware has already started the operation if the form is valid
            let valid = state
                .confirmation_popup
                .as_ref()
                .is_some_and(ConfirmationPopupState::is_valid);
            if valid {
                close(&mut state);
            } else if let Some(popup) = state.confirmation_popup.as_mut() {
                popup.show_validation = true;
            }
        }

        ConfirmationPopupAction::Cancel => {
            close(&mut state);
            log::debug!("Cancelled confirmation popup");
        }

        ConfirmationPopupAction::Char(c) => edit(&mut state, |input| input.push(*c)),
        ConfirmationPopupAction::Backspace => edit(&mut state, |input| {
            input.pop();
        }),
        ConfirmationPopupAction::ClearInput => edit(&mut state, String::clear),
    }

    state
}

fn close(state: &mut AppState) {
    state.confirmation_popup = None;
    pop_view(state, ViewId::ConfirmationPopup);
}

fn edit(state: &mut AppState, change: impl FnOnce(&mut String)) {
    if let Some(popup) = state.confirmation_popup.as_mut() {
        change(&mut popup.input_value);
        popup.show_validation = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PrDetailState;
    use crate::test_fixtures::pr;
    use pretty_assertions::assert_eq;

    fn on_detail() -> AppState {
        let mut state = AppState::default();
        state.pr_detail = PrDetailState::open(&pr("api", 12, 1));
        state.view_stack.push(ViewId::PrDetail);
        state
    }

    fn show(intent: ConfirmationIntent) -> AppState {
        reduce(on_detail(), &ConfirmationPopupAction::Show(intent))
    }

    #[test]
    fn test_show_prefills_configured_message() {
        let state = show(ConfirmationIntent::Approve);

        assert_eq!(state.active_view(), ViewId::ConfirmationPopup);
        let popup = state.confirmation_popup.unwrap();
        assert_eq!(popup.input_value, "Approved via gh-pr-manager");
        assert_eq!(popup.target.number, 12);
    }

    #[test]
    fn test_show_without_detail_target_is_ignored() {
        let state = reduce(
            AppState::default(),
            &ConfirmationPopupAction::Show(ConfirmationIntent::Merge),
        );

        assert!(state.confirmation_popup.is_none());
        assert_eq!(state.view_stack, vec![ViewId::PrList]);
    }

    #[test]
    fn test_confirm_empty_comment_keeps_popup_open() {
        let state = show(ConfirmationIntent::Comment);

        let state = reduce(state, &ConfirmationPopupAction::Confirm);

        assert_eq!(state.active_view(), ViewId::ConfirmationPopup);
        assert!(state.confirmation_popup.as_ref().unwrap().show_validation);

        let state = reduce(state, &ConfirmationPopupAction::Char('k'));
        assert!(!state.confirmation_popup.as_ref().unwrap().show_validation);
    }

    #[test]
    fn test_confirm_valid_message_closes_popup() {
        let mut state = show(ConfirmationIntent::Comment);
        for c in "LGTM".chars() {
            state = reduce(state, &ConfirmationPopupAction::Char(c));
        }

        let state = reduce(state, &ConfirmationPopupAction::Confirm);

        assert!(state.confirmation_popup.is_none());
        assert_eq!(state.view_stack, vec![ViewId::PrList, ViewId::PrDetail]);
    }

    #[test]
    fn test_editing_input() {
        let state = show(ConfirmationIntent::Approve);
        let state = reduce(state, &ConfirmationPopupAction::Backspace);
        assert_eq!(
            state.confirmation_popup.as_ref().unwrap().input_value,
            "Approved via gh-pr-manage"
        );

        let state = reduce(state, &ConfirmationPopupAction::ClearInput);
        assert_eq!(state.confirmation_popup.as_ref().unwrap().input_value, "");
    }

    #[test]
    fn test_cancel_returns_to_detail() {
        let state = reduce(
            show(ConfirmationIntent::Merge),
            &ConfirmationPopupAction::Cancel,
        );

        assert!(state.confirmation_popup.is_none());
        assert_eq!(state.active_view(), ViewId::PrDetail);
    }
}
