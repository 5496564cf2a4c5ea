//! Key Bindings Panel View Model
//!
//! Pre-computes presentation data for the key bindings help panel.

use crate::command_id::CommandId;
use crate::keybindings::Keymap;
use crate::state::AppState;
use strum::IntoEnumIterator;

/// A single binding row in the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingRow {
    /// Key hint (e.g., "F5/Ctrl+R", "gg")
    pub keys: String,
    pub description: &'static str,
}

/// Bindings of one command category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingSection {
    pub category: &'static str,
    pub bindings: Vec<BindingRow>,
}

#[derive(Debug, Clone)]
pub struct KeyBindingsViewModel {
    pub title: String,
    pub sections: Vec<BindingSection>,
    /// e.g. "j/↓ k/↑ scroll  Esc close"
    pub footer_scroll: String,
    pub footer_close: String,
    pub scroll_offset: usize,
}

impl KeyBindingsViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let keymap = &state.keymap;
        let sections = Self::build_sections(keymap);
        let max_scroll = Self::total_lines(&sections).saturating_sub(1);

        Self {
            title: " Keyboard Bindings ".to_string(),
            sections,
            footer_scroll: format!(
                "{} {}",
                keymap
                    .compact_hint_for_command(CommandId::NavigateNext)
                    .unwrap_or_else(|| "j".to_string()),
                keymap
                    .compact_hint_for_command(CommandId::NavigatePrevious)
                    .unwrap_or_else(|| "k".to_string()),
            ),
            footer_close: keymap
                .compact_hint_for_command(CommandId::GlobalClose)
                .unwrap_or_else(|| "Esc".to_string()),
            scroll_offset: state.key_bindings_panel.scroll_offset.min(max_scroll),
        }
    }

    /// Largest useful scroll offset for `keymap`
    pub fn max_scroll(keymap: &Keymap) -> usize {
        Self::total_lines(&Self::build_sections(keymap)).saturating_sub(1)
    }

    /// Header, separator, rows and a blank line per section
    fn total_lines(sections: &[BindingSection]) -> usize {
        sections.iter().map(|s| 2 + s.bindings.len() + 1).sum()
    }

    /// One row per bound command, grouped by category in command order
    fn build_sections(keymap: &Keymap) -> Vec<BindingSection> {
        let mut sections: Vec<BindingSection> = Vec::new();

        for command in CommandId::iter() {
            let Some(keys) = keymap.compact_hint_for_command(command) else {
                continue;
            };
            let row = BindingRow {
                keys,
                description: command.description(),
            };

            match sections.iter_mut().find(|s| s.category == command.category()) {
                Some(section) => section.bindings.push(row),
                None => sections.push(BindingSection {
                    category: command.category(),
                    bindings: vec![row],
                }),
            }
        }

        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::default_keymap;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sections_follow_command_order() {
        let vm = KeyBindingsViewModel::from_state(&AppState::default());
        let categories: Vec<&str> = vm.sections.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec!["Workspace", "Focus", "Navigation", "General"]
        );
        assert_eq!(
            vm.sections[0].bindings[0],
            BindingRow {
                keys: "F5/Ctrl+R".to_string(),
                description: CommandId::WorkspaceCompare.description(),
            }
        );
    }

    #[test]
    fn test_scroll_offset_is_clamped() {
        let mut state = AppState::default();
        state.key_bindings_panel.scroll_offset = 10_000;
        let vm = KeyBindingsViewModel::from_state(&state);
        assert_eq!(vm.scroll_offset, KeyBindingsViewModel::max_scroll(&default_keymap()));
    }
}
