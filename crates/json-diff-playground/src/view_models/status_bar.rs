//! Status Bar View Model
//!
//! Pre-computes presentation data for the status bar.

use crate::state::{AppState, StatusKind};
use ratatui::style::{Color, Modifier, Style};

/// View model for rendering the status bar
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub icon: &'static str,
    pub message: String,
    /// Timestamp formatted for display (e.g., "14:32:05")
    pub timestamp: String,
    /// Action that produced the message
    pub source: String,
    pub message_style: Style,
    pub bg_color: Color,
    /// Style for timestamp and source
    pub metadata_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let metadata_style = Style::default().fg(theme.text_muted);

        let Some(msg) = state.status_bar.latest() else {
            return Self {
                icon: "ℹ",
                message: "Paste or type JSON into both editors, then press F5 to compare"
                    .to_string(),
                timestamp: String::new(),
                source: String::new(),
                message_style: Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
                bg_color: theme.bg_secondary,
                metadata_style,
            };
        };

        let fg_color = match msg.kind {
            StatusKind::Running | StatusKind::Warning => theme.status_warning,
            StatusKind::Success => theme.status_success,
            StatusKind::Error => theme.status_error,
            StatusKind::Info => theme.status_info,
        };

        Self {
            icon: msg.kind.icon(),
            message: msg.message.clone(),
            timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
            source: msg.source_action.clone(),
            message_style: Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
            bg_color: theme.bg_secondary,
            metadata_style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusMessage;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_latest_message_is_shown() {
        let mut state = AppState::default();
        state
            .status_bar
            .push(StatusMessage::new(StatusKind::Error, "boom", "Compare"));

        let vm = StatusBarViewModel::from_state(&state);
        assert_eq!(vm.message, "boom");
        assert_eq!(vm.source, "Compare");
        assert_eq!(vm.icon, StatusKind::Error.icon());
        assert_eq!(vm.message_style.fg, Some(state.theme.status_error));
    }

    #[test]
    fn test_hint_without_messages() {
        let vm = StatusBarViewModel::from_state(&AppState::default());
        assert!(vm.timestamp.is_empty());
        assert!(vm.message.contains("F5"));
    }
}
