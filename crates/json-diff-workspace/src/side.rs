use crate::validator::{validate, ValidationVerdict};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two inputs an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// User-facing name of the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Left => "Original",
            Self::Right => "New",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the two independently edited text buffers.
///
/// The verdict is recomputed on every text change and never outlives the
/// text it was computed for.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSlot {
    side: Side,
    text: String,
    verdict: ValidationVerdict,
}

impl InputSlot {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            text: String::new(),
            verdict: ValidationVerdict::valid(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn verdict(&self) -> &ValidationVerdict {
        &self.verdict
    }

    /// Whether the slot holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.verdict = validate(&self.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_revalidates() {
        let mut slot = InputSlot::new(Side::Left);
        assert!(slot.verdict().valid);
        assert!(slot.is_blank());

        slot.set_text("{");
        assert!(!slot.verdict().valid);
        assert!(!slot.is_blank());

        slot.set_text("  \n");
        assert!(slot.verdict().valid);
        assert!(slot.is_blank());
    }

    #[test]
    fn test_side_labels() {
        assert_eq!(Side::Left.to_string(), "Original");
        assert_eq!(Side::Right.to_string(), "New");
    }
}
