//! Example picker state

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExamplePickerState {
    /// Index into the example catalog
    pub selected: usize,
}
