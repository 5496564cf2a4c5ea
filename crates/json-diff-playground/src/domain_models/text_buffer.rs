//! Caret-based text editing
//!
//! Carets are character offsets, never byte offsets, so multi-byte input
//! cannot split a code point.

use crate::actions::{CaretMove, EditorAction};

/// Outcome of applying one editor action to a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// New text, or `None` when the text is unchanged
    pub text: Option<String>,
    pub caret: usize,
}

impl TextEdit {
    /// Apply `action` to `text` with the caret at `caret`.
    pub fn apply(text: &str, caret: usize, action: &EditorAction) -> Self {
        let len = text.chars().count();
        let caret = caret.min(len);
        match action {
            EditorAction::Insert(inserted) => insert(text, caret, inserted),
            EditorAction::Newline => insert(text, caret, "\n"),
            EditorAction::Backspace if caret == 0 => unchanged(caret),
            EditorAction::Backspace => remove(text, caret - 1, caret),
            EditorAction::Delete if caret == len => unchanged(caret),
            EditorAction::Delete => remove(text, caret, caret + 1),
            EditorAction::ClearLine => {
                let (start, end) = line_bounds(text, caret);
                if start == end {
                    unchanged(caret)
                } else {
                    remove(text, start, end)
                }
            }
            EditorAction::MoveCaret(movement) => unchanged(move_caret(text, caret, *movement)),
            // Formatting rewrites the whole text and is left to the workspace
            EditorAction::Format => unchanged(caret),
        }
    }
}

/// Zero-based (line, column) of a caret
pub fn caret_position(text: &str, caret: usize) -> (usize, usize) {
    let mut line = 0;
    let mut column = 0;
    for c in text.chars().take(caret) {
        if c == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
    }
    (line, column)
}

fn unchanged(caret: usize) -> TextEdit {
    TextEdit { text: None, caret }
}

fn byte_offset(text: &str, caret: usize) -> usize {
    text.char_indices()
        .nth(caret)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

fn insert(text: &str, caret: usize, inserted: &str) -> TextEdit {
    // Terminals deliver pasted line breaks as \r or \r\n
    let inserted = inserted.replace("\r\n", "\n").replace('\r', "\n");
    if inserted.is_empty() {
        return unchanged(caret);
    }
    let at = byte_offset(text, caret);
    let mut next = String::with_capacity(text.len() + inserted.len());
    next.push_str(&text[..at]);
    next.push_str(&inserted);
    next.push_str(&text[at..]);
    TextEdit {
        text: Some(next),
        caret: caret + inserted.chars().count(),
    }
}

fn remove(text: &str, from: usize, to: usize) -> TextEdit {
    let start = byte_offset(text, from);
    let end = byte_offset(text, to);
    let mut next = String::with_capacity(text.len());
    next.push_str(&text[..start]);
    next.push_str(&text[end..]);
    TextEdit {
        text: Some(next),
        caret: from,
    }
}

/// Character offsets of the start and end (exclusive, before `\n`) of the
/// line holding `caret`
fn line_bounds(text: &str, caret: usize) -> (usize, usize) {
    let chars: Vec<char> = text.chars().collect();
    let start = chars[..caret]
        .iter()
        .rposition(|c| *c == '\n')
        .map(|i| i + 1)
        .unwrap_or(0);
    let end = chars[caret..]
        .iter()
        .position(|c| *c == '\n')
        .map(|i| caret + i)
        .unwrap_or(chars.len());
    (start, end)
}

fn move_caret(text: &str, caret: usize, movement: CaretMove) -> usize {
    let len = text.chars().count();
    match movement {
        CaretMove::Left => caret.saturating_sub(1),
        CaretMove::Right => (caret + 1).min(len),
        CaretMove::LineStart => line_bounds(text, caret).0,
        CaretMove::LineEnd => line_bounds(text, caret).1,
        CaretMove::Up | CaretMove::Down => {
            let (line, column) = caret_position(text, caret);
            let target = match movement {
                CaretMove::Up if line == 0 => return 0,
                CaretMove::Up => line - 1,
                _ => line + 1,
            };
            let mut offset = 0;
            for (index, content) in text.split('\n').enumerate() {
                let width = content.chars().count();
                if index == target {
                    return offset + column.min(width);
                }
                offset += width + 1;
            }
            len
        }
    }
}
