//! Navigation Translation Middleware
//!
//! Turns `Navigate(..)` into the action of whatever view is on top of the
//! stack. The translated action is dispatched again, so the GitHub
//! middleware still sees e.g. `PrList(OpenSelected)` produced from a key.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that translates Navigation actions via the active view
pub struct NavigationMiddleware;

impl NavigationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NavigationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for NavigationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Navigate(nav) = action {
            let view = state.active_view();
            match view.translate_navigation(*nav) {
                Some(translated) => {
                    log::debug!("{:?} on {:?} becomes {:?}", nav, view, translated);
                    dispatcher.dispatch(translated);
                    return false;
                }
                None => log::debug!("{:?} has no meaning on {:?}", nav, view),
            }
        }

        true
    }
}
