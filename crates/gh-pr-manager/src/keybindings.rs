//! Keybinding system
//!
//! Maps keyboard input to commands. Patterns are textual ("ctrl+c", "G",
//! "pagedown") so they stay readable in the keymap.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command_id::CommandId;

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone)]
pub struct KeyBinding {
    /// Textual representation of the key - e.g., "ctrl+c", "shift+tab"
    pub keys: String,
    /// Display hint for the UI - e.g., "Ctrl+C"
    pub hint: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char: "q", "0", "G" (case-sensitive)
/// - With modifiers: "ctrl+c", "shift+tab", "ctrl+shift+c"
/// - Special keys: "tab", "enter", "esc", "pageup", "up", "down", ...
pub fn parse_key_pattern(pattern: &str) -> Option<KeyPattern> {
    let pattern = pattern.trim();

    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        // Uppercase letters come with SHIFT modifier from terminal
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(KeyPattern {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let pattern_lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = pattern_lower.as_str();

    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
        key_part = rest;
    }

    let code = parse_key_code(key_part)?;
    Some(KeyPattern { code, modifiers })
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),
        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),
        _ => None,
    }
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, KeyPattern)>,
}

impl Keymap {
    /// Create a new keymap; unparsable patterns are dropped with a warning
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring invalid key pattern '{}'", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// All commands bound to this key, in keymap order
    pub fn match_key(&self, key: &KeyEvent) -> Vec<CommandId> {
        self.bindings
            .iter()
            .filter(|(_, pattern)| {
                if pattern.code == KeyCode::BackTab {
                    // BackTab arrives with or without SHIFT depending on the terminal
                    key.code == KeyCode::BackTab
                } else {
                    key.code == pattern.code && key.modifiers == pattern.modifiers
                }
            })
            .map(|(binding, _)| binding.command)
            .collect()
    }

    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().map(|(b, _)| b)
    }

    /// Get a compact hint string for a command (e.g., "j/↓" for NavigateNext)
    /// Deduplicates hints and joins with "/"
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut unique_hints: Vec<&str> = Vec::new();
        for binding in self.bindings().filter(|b| b.command == command) {
            if !unique_hints.contains(&binding.hint.as_str()) {
                unique_hints.push(&binding.hint);
            }
        }

        if unique_hints.is_empty() {
            None
        } else {
            Some(unique_hints.join("/"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_keymap() -> Keymap {
        use CommandId::*;
        Keymap::new(vec![
            KeyBinding::new("j", "j", NavigateNext),
            KeyBinding::new("down", "↓", NavigateNext),
            KeyBinding::new("k", "k", NavigatePrevious),
            KeyBinding::new("G", "G", NavigateToBottom),
            KeyBinding::new("q", "q", GlobalClose),
            KeyBinding::new("esc", "Esc", GlobalClose),
            KeyBinding::new("escape", "Esc", GlobalClose),
            KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
        ])
    }

    #[test]
    fn test_compact_hint_joins_and_deduplicates() {
        let keymap = test_keymap();

        assert_eq!(
            keymap.compact_hint_for_command(CommandId::NavigateNext),
            Some("j/↓".to_string())
        );
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::GlobalClose),
            Some("q/Esc".to_string())
        );
        assert_eq!(keymap.compact_hint_for_command(CommandId::PrMerge), None);
    }

    #[test]
    fn test_uppercase_key_pattern_parsing() {
        assert_eq!(
            parse_key_pattern("G"),
            Some(KeyPattern {
                code: KeyCode::Char('G'),
                modifiers: KeyModifiers::SHIFT
            })
        );
        assert_eq!(
            parse_key_pattern("g"),
            Some(KeyPattern {
                code: KeyCode::Char('g'),
                modifiers: KeyModifiers::NONE
            })
        );
    }

    #[test]
    fn test_modifier_and_special_key_parsing() {
        assert_eq!(
            parse_key_pattern("Ctrl+C"),
            Some(KeyPattern {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL
            })
        );
        assert_eq!(
            parse_key_pattern("pagedown").map(|p| p.code),
            Some(KeyCode::PageDown)
        );
        assert_eq!(parse_key_pattern("hyper+x"), None);
        assert_eq!(parse_key_pattern("p a"), None);
    }

    #[test]
    fn test_match_key_respects_modifiers() {
        let keymap = test_keymap();

        let shift_g = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(keymap.match_key(&shift_g), vec![CommandId::NavigateToBottom]);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(keymap.match_key(&ctrl_c), vec![CommandId::GlobalQuit]);

        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(keymap.match_key(&plain_c).is_empty());
    }

    #[test]
    fn test_default_keymap_binds_every_screen_key() {
        let keymap = crate::keymap::default_keymap();
        let key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);

        assert_eq!(keymap.match_key(&key('r')), vec![CommandId::PrReload]);
        assert_eq!(keymap.match_key(&key('0')), vec![CommandId::PrClearFilters]);
        assert_eq!(keymap.match_key(&key('x')), vec![CommandId::PrRequestChanges]);
        assert_eq!(
            keymap.match_key(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            vec![CommandId::PrOpenDetails]
        );
    }
}
