//! Keybinding system
//!
//! Maps keyboard input to commands. Supports single keys, modifier
//! combinations, function keys and two-key sequences such as `g g`.
//!
//! Key patterns are textual ("ctrl+o", "f5", "g g") and parsed once when
//! the keymap is built.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

use crate::command_id::CommandId;

/// Time allowed between the two keys of a sequence
const SEQUENCE_TIMEOUT: Duration = Duration::from_secs(2);

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone)]
pub struct KeyBinding {
    /// Textual key pattern, e.g. "ctrl+o", "g g", "shift+tab"
    pub keys: String,
    /// Display hint, e.g. "Ctrl+O"
    pub hint: String,
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
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedKeyPattern {
    Single {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Two plain characters pressed one after the other
    Sequence { first: char, second: char },
}

/// Parse a textual key pattern.
///
/// - Single char: "q", "G" (uppercase implies SHIFT, as terminals report it)
/// - Modifiers: "ctrl+o", "shift+tab", "ctrl+shift+c"
/// - Named keys: "tab", "enter", "esc", "space", "up", "f5", ...
/// - Sequences: "g g"
pub fn parse_key_pattern(pattern: &str) -> Option<ParsedKeyPattern> {
    let pattern = pattern.trim();

    if pattern.contains(' ') {
        let parts: Vec<&str> = pattern.split_whitespace().collect();
        return match parts.as_slice() {
            [first, second] => Some(ParsedKeyPattern::Sequence {
                first: single_char(first)?,
                second: single_char(second)?,
            }),
            _ => None,
        };
    }

    if let Some(c) = single_char(pattern) {
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(ParsedKeyPattern::Single {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let lowered = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut rest = lowered.as_str();
    while let Some((modifier, tail)) = rest.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => break,
        }
        rest = tail;
    }

    Some(ParsedKeyPattern::Single {
        code: parse_key_code(rest)?,
        modifiers,
    })
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    let code = match s {
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "space" => KeyCode::Char(' '),
        s if s.len() > 1 && s.starts_with('f') => KeyCode::F(s[1..].parse().ok()?),
        s => KeyCode::Char(single_char(s)?),
    };
    Some(code)
}

/// First key of a sequence, waiting for the second
#[derive(Debug, Clone)]
pub struct PendingKey {
    pub key: char,
    pub timestamp: Instant,
}

impl PendingKey {
    pub fn new(key: char) -> Self {
        Self {
            key,
            timestamp: Instant::now(),
        }
    }

    fn is_live(&self) -> bool {
        self.timestamp.elapsed() < SEQUENCE_TIMEOUT
    }
}

/// What a key press resolved to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyMatch {
    /// Candidate commands, in keymap order; the first one the active view
    /// accepts wins
    pub commands: Vec<CommandId>,
    /// The key starts a sequence; remember it and wait for the next one
    pub pending: Option<char>,
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, ParsedKeyPattern)>,
}

impl Keymap {
    /// Build a keymap; bindings with unparsable patterns are dropped
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let bindings = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring keybinding with invalid pattern {:?}", binding.keys);
                    None
                }
            })
            .collect();
        Self { bindings }
    }

    /// Resolve a key press, taking a pending sequence key into account
    pub fn match_key(&self, key: &KeyEvent, pending: Option<&PendingKey>) -> KeyMatch {
        let plain_char = match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        };

        if let (Some(pending), Some(current)) = (pending.filter(|p| p.is_live()), plain_char) {
            let completed = self.bindings.iter().find(|(_, pattern)| {
                matches!(pattern, ParsedKeyPattern::Sequence { first, second }
                    if *first == pending.key && *second == current)
            });
            if let Some((binding, _)) = completed {
                return KeyMatch {
                    commands: vec![binding.command],
                    pending: None,
                };
            }
        }

        let commands: Vec<CommandId> = self
            .bindings
            .iter()
            .filter(|(_, pattern)| match pattern {
                // Terminals disagree on whether BackTab carries SHIFT
                ParsedKeyPattern::Single {
                    code: KeyCode::BackTab,
                    ..
                } => key.code == KeyCode::BackTab,
                ParsedKeyPattern::Single { code, modifiers } => {
                    key.code == *code && key.modifiers == *modifiers
                }
                ParsedKeyPattern::Sequence { .. } => false,
            })
            .map(|(binding, _)| binding.command)
            .collect();

        if !commands.is_empty() {
            return KeyMatch {
                commands,
                pending: None,
            };
        }

        let starts_sequence = plain_char.filter(|c| {
            self.bindings.iter().any(
                |(_, pattern)| matches!(pattern, ParsedKeyPattern::Sequence { first, .. } if first == c),
            )
        });
        KeyMatch {
            commands: Vec::new(),
            pending: starts_sequence,
        }
    }

    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().map(|(b, _)| b)
    }

    pub fn hint_for_command(&self, command: CommandId) -> Option<&str> {
        self.hints_for_command(command).into_iter().next()
    }

    pub fn hints_for_command(&self, command: CommandId) -> Vec<&str> {
        self.bindings
            .iter()
            .filter(|(b, _)| b.command == command)
            .map(|(b, _)| b.hint.as_str())
            .collect()
    }

    /// All distinct hints of a command joined with "/", e.g. "F5/Ctrl+R"
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut unique: Vec<&str> = Vec::new();
        for hint in self.hints_for_command(command) {
            if !unique.contains(&hint) {
                unique.push(hint);
            }
        }
        (!unique.is_empty()).then(|| unique.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_keymap() -> Keymap {
        use CommandId::*;
        Keymap::new(vec![
            KeyBinding::new("f5", "F5", WorkspaceCompare),
            KeyBinding::new("ctrl+r", "Ctrl+R", WorkspaceCompare),
            KeyBinding::new("j", "j", NavigateNext),
            KeyBinding::new("down", "↓", NavigateNext),
            KeyBinding::new("shift+tab", "Shift+Tab", FocusPrevious),
            KeyBinding::new("backtab", "Shift+Tab", FocusPrevious),
            KeyBinding::new("enter", "Enter", Confirm),
            KeyBinding::new("enter", "Enter", ToggleSelect),
            KeyBinding::new("G", "G", NavigateToBottom),
            KeyBinding::new("g g", "gg", NavigateToTop),
        ])
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_parse_function_and_modifier_keys() {
        assert_eq!(
            parse_key_pattern("F5"),
            Some(ParsedKeyPattern::Single {
                code: KeyCode::F(5),
                modifiers: KeyModifiers::NONE
            })
        );
        assert_eq!(
            parse_key_pattern("ctrl+o"),
            Some(ParsedKeyPattern::Single {
                code: KeyCode::Char('o'),
                modifiers: KeyModifiers::CONTROL
            })
        );
        assert_eq!(
            parse_key_pattern("g g"),
            Some(ParsedKeyPattern::Sequence {
                first: 'g',
                second: 'g'
            })
        );
        assert_eq!(parse_key_pattern("g g g"), None);
        assert_eq!(parse_key_pattern("hyper+x"), None);
    }

    #[test]
    fn test_uppercase_pattern_implies_shift() {
        assert_eq!(
            parse_key_pattern("G"),
            Some(ParsedKeyPattern::Single {
                code: KeyCode::Char('G'),
                modifiers: KeyModifiers::SHIFT
            })
        );
    }

    #[test]
    fn test_match_returns_every_candidate_in_order() {
        let keymap = test_keymap();
        let matched = keymap.match_key(&press(KeyCode::Enter, KeyModifiers::NONE), None);
        assert_eq!(
            matched.commands,
            vec![CommandId::Confirm, CommandId::ToggleSelect]
        );
    }

    #[test]
    fn test_backtab_matches_with_or_without_shift() {
        let keymap = test_keymap();
        for modifiers in [KeyModifiers::NONE, KeyModifiers::SHIFT] {
            let matched = keymap.match_key(&press(KeyCode::BackTab, modifiers), None);
            assert!(matched.commands.contains(&CommandId::FocusPrevious));
        }
    }

    #[test]
    fn test_ctrl_char_does_not_match_plain_binding() {
        let keymap = test_keymap();
        let matched = keymap.match_key(&press(KeyCode::Char('j'), KeyModifiers::CONTROL), None);
        assert_eq!(matched, KeyMatch::default());
    }

    #[test]
    fn test_sequence_waits_then_completes() {
        let keymap = test_keymap();
        let first = keymap.match_key(&press(KeyCode::Char('g'), KeyModifiers::NONE), None);
        assert!(first.commands.is_empty());
        assert_eq!(first.pending, Some('g'));

        let pending = PendingKey::new('g');
        let second = keymap.match_key(
            &press(KeyCode::Char('g'), KeyModifiers::NONE),
            Some(&pending),
        );
        assert_eq!(second.commands, vec![CommandId::NavigateToTop]);
        assert_eq!(second.pending, None);
    }

    #[test]
    fn test_expired_pending_key_starts_over() {
        let keymap = test_keymap();
        let stale = PendingKey {
            key: 'g',
            timestamp: Instant::now() - Duration::from_secs(5),
        };
        let matched = keymap.match_key(
            &press(KeyCode::Char('g'), KeyModifiers::NONE),
            Some(&stale),
        );
        assert!(matched.commands.is_empty());
        assert_eq!(matched.pending, Some('g'));
    }

    #[test]
    fn test_shift_g_is_not_a_sequence_start() {
        let keymap = test_keymap();
        let matched = keymap.match_key(&press(KeyCode::Char('G'), KeyModifiers::SHIFT), None);
        assert_eq!(matched.commands, vec![CommandId::NavigateToBottom]);
    }

    #[test]
    fn test_hints() {
        let keymap = test_keymap();
        assert_eq!(keymap.hint_for_command(CommandId::WorkspaceCompare), Some("F5"));
        assert_eq!(
            keymap.hints_for_command(CommandId::NavigateNext),
            vec!["j", "↓"]
        );
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::WorkspaceCompare),
            Some("F5/Ctrl+R".to_string())
        );
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::FocusPrevious),
            Some("Shift+Tab".to_string())
        );
        assert_eq!(keymap.compact_hint_for_command(CommandId::GlobalQuit), None);
    }
}
