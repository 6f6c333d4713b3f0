//! Text Input Translation Middleware
//!
//! Popups own the text they edit: typed characters, Backspace, Enter and
//! Esc reach the repository filter or the confirmation popup as their own
//! actions.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that translates TextInput actions via the active view
pub struct TextInputMiddleware;

impl TextInputMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextInputMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for TextInputMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::TextInput(input) = action {
            let view = state.active_view();
            let Some(translated) = view.translate_text_input(input.clone()) else {
                log::debug!("{:?} ignores text input {:?}", view, input);
                return true;
            };
            dispatcher.dispatch(translated);
            return false;
        }

        true
    }
}
