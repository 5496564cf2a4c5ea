//! Editor Settings View

use crate::actions::{Action, ContextAction, NavigationAction, SettingsAction};
use crate::capabilities::PanelCapabilities;
use crate::state::{AppState, SettingsField};
use crate::views::{popup_area, View, ViewId};
use json_diff_config::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Default)]
pub struct SettingsView;

impl SettingsView {
    pub fn new() -> Self {
        Self
    }
}

impl View for SettingsView {
    fn view_id(&self) -> ViewId {
        ViewId::Settings
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::VIM_NAVIGATION_BINDINGS
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction, _state: &AppState) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => SettingsAction::NavigateNext,
            NavigationAction::Previous => SettingsAction::NavigatePrevious,
            NavigationAction::Left => SettingsAction::Decrease,
            NavigationAction::Right => SettingsAction::Increase,
            NavigationAction::ToTop | NavigationAction::ToBottom => return None,
        };
        Some(Action::Settings(action))
    }

    fn translate_context_action(&self, _action: ContextAction, _state: &AppState) -> Option<Action> {
        Some(Action::Settings(SettingsAction::Toggle))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Settings(_) | Action::Navigate(_) | Action::ViewContext(_) | Action::Global(_)
        )
    }
}

/// Display value of one settings row
fn field_value(state: &AppState, field: SettingsField) -> String {
    let prefs = &state.preferences;
    match field {
        SettingsField::Theme => prefs.theme.label().to_string(),
        SettingsField::FontSize => format!("{} ({MIN_FONT_SIZE}-{MAX_FONT_SIZE})", prefs.font_size),
        SettingsField::Minimap => if prefs.minimap { "on" } else { "off" }.to_string(),
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let popup = popup_area(area, 44, SettingsField::iter().count() as u16 + 4, f);

    let rows: Vec<Line> = SettingsField::iter()
        .map(|field| {
            let style = if field == state.settings.selected {
                theme.selected()
            } else {
                theme.base()
            };
            Line::from(vec![
                Span::styled(format!(" {:<12}", field.label()), style),
                Span::styled(format!("◂ {} ▸ ", field_value(state, field)), style),
            ])
        })
        .collect();

    let footer = Line::from(vec![
        Span::styled(" ←/→", theme.key_hint()),
        Span::styled(" change  ", theme.muted()),
        Span::styled("Esc", theme.key_hint()),
        Span::styled(" close ", theme.muted()),
    ]);
    let block = Block::default()
        .title(" Editor Settings ")
        .title_style(theme.panel_title())
        .title_alignment(Alignment::Center)
        .title_bottom(footer)
        .borders(Borders::ALL)
        .border_style(theme.panel_border(true))
        .style(theme.panel_background());

    f.render_widget(Paragraph::new(rows).block(block), popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_diff_config::EditorPreferences;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_left_right_change_values() {
        let view = SettingsView::new();
        let state = AppState::default();
        assert!(matches!(
            view.translate_navigation(NavigationAction::Right, &state),
            Some(Action::Settings(SettingsAction::Increase))
        ));
        assert!(matches!(
            view.translate_navigation(NavigationAction::Left, &state),
            Some(Action::Settings(SettingsAction::Decrease))
        ));
    }

    #[test]
    fn test_field_values() {
        let state = AppState {
            preferences: EditorPreferences {
                font_size: 16,
                minimap: false,
                ..EditorPreferences::default()
            },
            ..Default::default()
        };
        assert_eq!(field_value(&state, SettingsField::FontSize), "16 (10-24)");
        assert_eq!(field_value(&state, SettingsField::Minimap), "off");
    }
}
