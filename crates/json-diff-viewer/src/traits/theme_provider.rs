//! Trait for providing theme configuration to the diff tree widget.

use crate::model::ChangeKind;
use ratatui::style::Color;

/// Provides colors for the diff tree widget.
///
/// Implement this trait to integrate the widget with your application's
/// theme system. The theme instance is injected by the caller.
pub trait ThemeProvider: Send + Sync {
    /// Foreground color for added values.
    fn added_foreground(&self) -> Color;

    /// Foreground color for deleted values.
    fn deleted_foreground(&self) -> Color;

    /// Foreground color for modified values.
    fn modified_foreground(&self) -> Color {
        Color::Yellow
    }

    /// Foreground color for unchanged values.
    fn unchanged_foreground(&self) -> Color {
        Color::Gray
    }

    /// Foreground color for keys and indices.
    fn key_foreground(&self) -> Color {
        Color::Cyan
    }

    /// Foreground color for brackets and fold markers.
    fn punctuation_foreground(&self) -> Color {
        Color::DarkGray
    }

    /// Background color for the cursor line.
    fn cursor_background(&self) -> Color {
        Color::Rgb(50, 50, 80)
    }

    /// Border color of the widget.
    fn border_foreground(&self, focused: bool) -> Color {
        if focused {
            Color::White
        } else {
            Color::DarkGray
        }
    }

    /// Foreground color used for a change kind.
    fn change_foreground(&self, kind: ChangeKind) -> Color {
        match kind {
            ChangeKind::Added => self.added_foreground(),
            ChangeKind::Deleted => self.deleted_foreground(),
            ChangeKind::Modified => self.modified_foreground(),
            ChangeKind::Unchanged => self.unchanged_foreground(),
        }
    }
}

/// Default theme with dark-mode colors.
#[derive(Debug, Clone, Default)]
pub struct DefaultTheme;

impl ThemeProvider for DefaultTheme {
    fn added_foreground(&self) -> Color {
        Color::Green
    }

    fn deleted_foreground(&self) -> Color {
        Color::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_change_colors() {
        let theme = DefaultTheme;
        assert_eq!(theme.change_foreground(ChangeKind::Added), Color::Green);
        assert_eq!(theme.change_foreground(ChangeKind::Deleted), Color::Red);
        assert_eq!(theme.change_foreground(ChangeKind::Modified), Color::Yellow);
        assert_eq!(theme.change_foreground(ChangeKind::Unchanged), Color::Gray);
    }
}
