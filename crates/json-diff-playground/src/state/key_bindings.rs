//! Key bindings help panel state

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyBindingsPanelState {
    pub scroll_offset: usize,
}
