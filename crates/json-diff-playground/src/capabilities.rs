//! Panel capability system
//!
//! Views declare what kind of input they take, and the keyboard middleware
//! routes keys based on that instead of on the concrete view type.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a panel can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// Panel can scroll vertically
        const SCROLL_VERTICAL = 1 << 0;

        /// Panel supports vim-style navigation keybindings (j, k, gg, G)
        const VIM_NAVIGATION_BINDINGS = 1 << 1;

        /// Panel can navigate to next/previous items with the arrow keys
        const ITEM_NAVIGATION = 1 << 2;

        /// Character keys are typed into the panel rather than looked up in the keymap
        const TEXT_INPUT = 1 << 3;

        /// Text input spans multiple lines; Enter inserts a line break and
        /// the arrow keys move the caret
        const MULTILINE_TEXT = 1 << 4;
    }
}

impl PanelCapabilities {
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }

    /// Caret movement needs both a text field and more than one line
    pub fn supports_caret_movement(self) -> bool {
        self.contains(Self::TEXT_INPUT | Self::MULTILINE_TEXT)
    }

    pub fn supports_vim_navigation(self) -> bool {
        self.contains(Self::VIM_NAVIGATION_BINDINGS)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_movement_requires_both_flags() {
        assert!(!PanelCapabilities::empty().supports_caret_movement());
        assert!(!PanelCapabilities::TEXT_INPUT.supports_caret_movement());
        assert!(!PanelCapabilities::MULTILINE_TEXT.supports_caret_movement());

        let editor = PanelCapabilities::TEXT_INPUT | PanelCapabilities::MULTILINE_TEXT;
        assert!(editor.supports_caret_movement());
        assert!(editor.accepts_text_input());
    }

    #[test]
    fn test_item_navigation_independent_of_text_input() {
        let prompt = PanelCapabilities::TEXT_INPUT | PanelCapabilities::ITEM_NAVIGATION;
        assert!(prompt.supports_item_navigation());
        assert!(!prompt.supports_caret_movement());
        assert!(!prompt.supports_vim_navigation());
    }
}
