use crate::actions::StatusBarAction;
use crate::state::{StatusBarState, StatusKind};

pub fn reduce(mut state: StatusBarState, action: &StatusBarAction) -> StatusBarState {
    match action {
        StatusBarAction::Running(message) => state.set(StatusKind::Running, message.clone()),
        StatusBarAction::Success(message) => state.set(StatusKind::Success, message.clone()),
        StatusBarAction::Error(message) => state.set(StatusKind::Error, message.clone()),
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_latest_message_wins() {
        let state = reduce(
            StatusBarState::default(),
            &StatusBarAction::Running("Merging acme/api#1".into()),
        );
        let state = reduce(state, &StatusBarAction::Error("Merge failed".into()));

        let current = state.current.unwrap();
        assert_eq!(current.kind, StatusKind::Error);
        assert_eq!(current.message, "Merge failed");
    }
}
