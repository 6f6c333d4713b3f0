pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Navigation
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("up", "↑", NavigatePrevious),
        KeyBinding::new("g", "g", NavigateToTop),
        KeyBinding::new("G", "G", NavigateToBottom),
        // Scrolling
        KeyBinding::new("pagedown", "PgDn", ScrollPageDown),
        KeyBinding::new("pageup", "PgUp", ScrollPageUp),
        // PR list
        KeyBinding::new("enter", "Enter", PrOpenDetails),
        KeyBinding::new("r", "r", PrReload),
        KeyBinding::new("o", "o", PrToggleOrder),
        KeyBinding::new("f", "f", PrFilterRepository),
        KeyBinding::new("0", "0", PrClearFilters),
        // PR detail
        KeyBinding::new("d", "d", PrViewFiles),
        KeyBinding::new("a", "a", PrApprove),
        KeyBinding::new("c", "c", PrComment),
        KeyBinding::new("x", "x", PrRequestChanges),
        KeyBinding::new("m", "m", PrMerge),
        // General
        KeyBinding::new("q", "q", GlobalClose),
        KeyBinding::new("esc", "Esc", GlobalClose),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ];

    Keymap::new(bindings)
}
