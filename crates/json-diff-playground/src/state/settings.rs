//! Editor settings panel state

use strum::{EnumIter, IntoEnumIterator};

/// Rows of the settings panel, top to bottom
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter)]
pub enum SettingsField {
    #[default]
    Theme,
    FontSize,
    Minimap,
}

impl SettingsField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Theme => "Theme",
            Self::FontSize => "Font size",
            Self::Minimap => "Minimap",
        }
    }

    pub fn next(self) -> Self {
        let fields: Vec<_> = Self::iter().collect();
        let index = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(index + 1) % fields.len()]
    }

    pub fn previous(self) -> Self {
        let fields: Vec<_> = Self::iter().collect();
        let index = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(index + fields.len() - 1) % fields.len()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsState {
    pub selected: SettingsField,
}
