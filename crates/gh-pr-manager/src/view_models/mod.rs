//! View models
//!
//! Pre-compute display data from state so the views only lay things out.

pub mod pr_detail;
pub mod pr_files;
pub mod pr_list;

pub use pr_detail::PrDetailViewModel;
pub use pr_files::{DocumentLine, PrFilesViewModel};
pub use pr_list::{PrListBody, PrListViewModel};

use crate::keymap::{CommandId, Keymap};

/// One "key description" pair of a footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: String,
    pub description: &'static str,
}

/// Footer hints for `commands`, skipping unbound ones
pub fn key_hints(keymap: &Keymap, commands: &[CommandId]) -> Vec<KeyHint> {
    commands
        .iter()
        .filter_map(|command| {
            keymap
                .compact_hint_for_command(*command)
                .map(|key| KeyHint {
                    key,
                    description: command.description(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::default_keymap;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_key_hints_use_compact_hints() {
        let hints = key_hints(
            &default_keymap(),
            &[CommandId::NavigateNext, CommandId::GlobalClose],
        );

        assert_eq!(
            hints,
            vec![
                KeyHint {
                    key: "j/↓".to_string(),
                    description: "Down"
                },
                KeyHint {
                    key: "q/Esc".to_string(),
                    description: "Back"
                },
            ]
        );
    }
}
