//! Global actions - not tied to any specific screen

use crate::views::ViewId;
use ratatui::crossterm::event::KeyEvent;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Close the current view (pop from stack); quits on the last view
    Close,
    /// Quit the application
    Quit,
    /// Push a view onto the stack
    PushView(ViewId),
}
