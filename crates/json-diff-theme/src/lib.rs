use json_diff_viewer::ThemeProvider;
use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Diff colors
    pub diff_added: Color,
    pub diff_deleted: Color,
    pub diff_modified: Color,
    pub diff_unchanged: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Editor colors
    pub cursor_bg: Color,
    pub cursor_fg: Color,
    pub gutter_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Theme matching the given dark-mode flag
    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Dark theme
    pub fn dark() -> Self {
        Self {
            dark: true,

            bg_primary: tailwind::SLATE.c950,
            bg_secondary: tailwind::SLATE.c900,
            bg_panel: tailwind::SLATE.c800,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::CYAN.c600,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,

            diff_added: tailwind::GREEN.c400,
            diff_deleted: tailwind::RED.c400,
            diff_modified: tailwind::AMBER.c400,
            diff_unchanged: tailwind::SLATE.c400,

            selected_bg: tailwind::BLUE.c400,
            selected_fg: Color::White,

            cursor_bg: tailwind::SLATE.c200,
            cursor_fg: tailwind::SLATE.c950,
            gutter_fg: tailwind::SLATE.c600,
        }
    }

    /// Light theme (default)
    pub fn light() -> Self {
        Self {
            dark: false,

            bg_primary: tailwind::SLATE.c50,
            bg_secondary: tailwind::SLATE.c100,
            bg_panel: tailwind::SLATE.c200,

            text_primary: tailwind::SLATE.c900,
            text_secondary: tailwind::SLATE.c700,
            text_muted: tailwind::SLATE.c500,

            accent_primary: tailwind::BLUE.c600,
            accent_secondary: tailwind::BLUE.c400,

            status_success: tailwind::GREEN.c700,
            status_error: tailwind::RED.c600,
            status_warning: tailwind::AMBER.c600,
            status_info: tailwind::BLUE.c600,

            diff_added: tailwind::GREEN.c700,
            diff_deleted: tailwind::RED.c600,
            diff_modified: tailwind::AMBER.c700,
            diff_unchanged: tailwind::SLATE.c500,

            selected_bg: tailwind::BLUE.c200,
            selected_fg: tailwind::SLATE.c950,

            cursor_bg: tailwind::SLATE.c800,
            cursor_fg: tailwind::SLATE.c50,
            gutter_fg: tailwind::SLATE.c400,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for the whole screen background
    pub fn base(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.bg_primary)
    }

    /// Style for panel backgrounds (popups, status bar)
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel).fg(self.text_primary)
    }

    /// Style for panel borders
    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.accent_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_muted)
        }
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "F5" in "F5 Compare")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for selected list rows
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the editor text cursor
    pub fn cursor(&self) -> Style {
        Style::default().fg(self.cursor_fg).bg(self.cursor_bg)
    }

    /// Style for muted/secondary text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for warning messages
    pub fn warning(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for informational messages
    pub fn info(&self) -> Style {
        Style::default().fg(self.status_info)
    }

    /// Style for disabled toolbar entries
    pub fn disabled(&self) -> Style {
        Style::default()
            .fg(self.text_muted)
            .add_modifier(Modifier::DIM)
    }
}

impl ThemeProvider for Theme {
    fn added_foreground(&self) -> Color {
        self.diff_added
    }

    fn deleted_foreground(&self) -> Color {
        self.diff_deleted
    }

    fn modified_foreground(&self) -> Color {
        self.diff_modified
    }

    fn unchanged_foreground(&self) -> Color {
        self.diff_unchanged
    }

    fn key_foreground(&self) -> Color {
        self.accent_primary
    }

    fn punctuation_foreground(&self) -> Color {
        self.text_muted
    }

    fn cursor_background(&self) -> Color {
        self.selected_bg
    }

    fn border_foreground(&self, focused: bool) -> Color {
        if focused {
            self.accent_primary
        } else {
            self.text_muted
        }
    }
}
