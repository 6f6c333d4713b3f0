use crate::actions::{Action, GlobalAction, PrFilesAction, PrListAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Loaded payloads can be large; log their size only
            Action::PrList(PrListAction::Loaded(prs)) => {
                log::debug!("Action: PrList(Loaded({} pull requests))", prs.len());
            }
            Action::PrFiles(PrFilesAction::Loaded(key, files)) => {
                log::debug!("Action: PrFiles(Loaded({key}, {} files))", files.len());
            }
            Action::Global(GlobalAction::KeyPressed(key)) => {
                log::trace!("Action: KeyPressed({:?})", key);
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}
