//! Dispatcher for middleware action dispatch
//!
//! Middleware and background tasks never touch state. They send actions
//! through the Dispatcher into the store's queue, and the main loop drains
//! that queue between input events.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions back into the store
///
/// Cheap to clone; every spawned GitHub task owns one.
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the store's action queue
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action; it runs through the full middleware chain later
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
