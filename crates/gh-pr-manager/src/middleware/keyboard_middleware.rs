//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! This middleware uses a three-layer approach to handle keyboard input:
//!
//! ## Layer 1: Priority Keys
//! Keys that always work regardless of context (Ctrl+C, Esc).
//!
//! ## Layer 2: Capabilities
//! Route keys based on view capabilities. Views with TEXT_INPUT capability
//! receive character keys as text rather than as keybindings.
//!
//! ## Layer 3: Keymap + Gating
//! Look up keys in the keymap, then check if the active view accepts the action.
//! This prevents actions from "leaking" to reducers when a different view is active.

use crate::actions::{Action, GlobalAction, NavigationAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware handles keyboard input using a three-layer approach
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Map a key event to at most one action
    fn translate_key(&self, key: KeyEvent, state: &AppState) -> Option<Action> {
        let view = state.active_view();
        let capabilities = view.capabilities();

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 1: Priority keys (always work)
        // ═══════════════════════════════════════════════════════════════════

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            return Some(Action::Global(GlobalAction::Quit));
        }

        // Esc: views with text input decide themselves (cancel), others close
        if key.code == KeyCode::Esc {
            return Some(if capabilities.accepts_text_input() {
                Action::TextInput(TextInputAction::Escape)
            } else {
                Action::Global(GlobalAction::Close)
            });
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 2: Capability-based routing
        // ═══════════════════════════════════════════════════════════════════

        if capabilities.accepts_text_input() {
            match key.code {
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Some(Action::TextInput(TextInputAction::ClearLine));
                }
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    log::debug!("Layer 2: TEXT_INPUT - routing char '{}' to TextInput", c);
                    return Some(Action::TextInput(TextInputAction::Char(c)));
                }
                KeyCode::Backspace => {
                    return Some(Action::TextInput(TextInputAction::Backspace));
                }
                KeyCode::Enter => {
                    return Some(Action::TextInput(TextInputAction::Confirm));
                }
                KeyCode::Down if capabilities.supports_item_navigation() => {
                    return Some(Action::Navigate(NavigationAction::Next));
                }
                KeyCode::Up if capabilities.supports_item_navigation() => {
                    return Some(Action::Navigate(NavigationAction::Previous));
                }
                // Anything else falls through to the keymap
                _ => {}
            }
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 3: Keymap lookup + Gating
        // ═══════════════════════════════════════════════════════════════════

        for command in state.keymap.match_key(&key) {
            let action = command.to_action();
            if view.accepts_action(&action) {
                log::debug!("Layer 3: Command {:?} accepted by {:?}", command, view);
                return Some(action);
            }
            log::debug!("Layer 3: Command {:?} rejected by {:?}", command, view);
        }

        None
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        // Only intercept Global KeyPressed actions
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            if let Some(translated) = self.translate_key(*key, state) {
                dispatcher.dispatch(translated);
            }
            // Unhandled keys are consumed (not passed through)
            return false;
        }

        true
    }
}
