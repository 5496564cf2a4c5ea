pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Workspace
        KeyBinding::new("f5", "F5", WorkspaceCompare),
        KeyBinding::new("ctrl+r", "Ctrl+R", WorkspaceCompare),
        KeyBinding::new("ctrl+o", "Ctrl+O", WorkspaceImport),
        KeyBinding::new("ctrl+s", "Ctrl+S", WorkspaceExportData),
        KeyBinding::new("ctrl+e", "Ctrl+E", WorkspaceExportDocument),
        KeyBinding::new("ctrl+f", "Ctrl+F", WorkspaceFormat),
        KeyBinding::new("ctrl+t", "Ctrl+T", ExamplesOpen),
        // Focus
        KeyBinding::new("tab", "Tab", FocusNext),
        KeyBinding::new("shift+tab", "Shift+Tab", FocusPrevious),
        KeyBinding::new("backtab", "Shift+Tab", FocusPrevious),
        // Navigation
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("up", "↑", NavigatePrevious),
        KeyBinding::new("h", "h", NavigateLeft),
        KeyBinding::new("left", "←", NavigateLeft),
        KeyBinding::new("l", "l", NavigateRight),
        KeyBinding::new("right", "→", NavigateRight),
        KeyBinding::new("g g", "gg", NavigateToTop),
        KeyBinding::new("G", "G", NavigateToBottom),
        KeyBinding::new("enter", "Enter", Confirm),
        KeyBinding::new("space", "Space", ToggleSelect),
        // Panels
        KeyBinding::new("f2", "F2", SettingsOpen),
        KeyBinding::new("f1", "F1", KeyBindingsOpen),
        KeyBinding::new("?", "?", KeyBindingsOpen),
        // General
        KeyBinding::new("q", "q", GlobalClose),
        KeyBinding::new("esc", "Esc", GlobalClose),
        KeyBinding::new("ctrl+q", "Ctrl+Q", GlobalQuit),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ];

    Keymap::new(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_command_is_bound() {
        let keymap = default_keymap();
        for command in CommandId::iter() {
            assert!(
                keymap.hint_for_command(command).is_some(),
                "{command:?} has no key"
            );
        }
    }

    #[test]
    fn test_every_pattern_parses() {
        assert_eq!(default_keymap().bindings().count(), 29);
    }
}
