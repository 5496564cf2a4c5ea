//! Key Bindings Help Panel View
//!
//! Displays all available keybindings grouped by category.

use crate::actions::{Action, KeyBindingsAction, NavigationAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::KeyBindingsViewModel;
use crate::views::{popup_area, View, ViewId};
use json_diff_theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct KeyBindingsView;

impl KeyBindingsView {
    pub fn new() -> Self {
        Self
    }
}

impl View for KeyBindingsView {
    fn view_id(&self) -> ViewId {
        ViewId::KeyBindings
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::SCROLL_VERTICAL | PanelCapabilities::VIM_NAVIGATION_BINDINGS
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction, _state: &AppState) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => KeyBindingsAction::NavigateNext,
            NavigationAction::Previous => KeyBindingsAction::NavigatePrevious,
            NavigationAction::ToTop => KeyBindingsAction::NavigateToTop,
            NavigationAction::ToBottom => KeyBindingsAction::NavigateToBottom,
            NavigationAction::Left | NavigationAction::Right => return None,
        };
        Some(Action::KeyBindings(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::KeyBindings(_) | Action::Navigate(_) | Action::Global(_)
        )
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let popup = popup_area(area, area.width * 6 / 10, area.height * 9 / 10, f);
    let vm = KeyBindingsViewModel::from_state(state);

    let footer = Line::from(vec![
        Span::styled(format!(" {}", vm.footer_scroll), theme.key_hint()),
        Span::styled(" scroll  ", theme.muted()),
        Span::styled(vm.footer_close.clone(), theme.key_hint()),
        Span::styled(" close ", theme.muted()),
    ]);
    let block = Block::default()
        .title(vm.title.clone())
        .borders(Borders::ALL)
        .border_style(theme.panel_border(true))
        .title_style(theme.panel_title())
        .title_alignment(Alignment::Center)
        .title_bottom(footer);

    let inner = block.inner(popup);
    let lines: Vec<Line> = content_lines(&vm, theme)
        .into_iter()
        .skip(vm.scroll_offset)
        .take(inner.height as usize)
        .collect();

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(theme.panel_background()),
        popup,
    );
}

const LEFT_PADDING: &str = "  ";

fn content_lines(vm: &KeyBindingsViewModel, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for section in &vm.sections {
        lines.push(Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::styled(section.category, theme.panel_title()),
        ]));
        lines.push(Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::styled("─".repeat(section.category.len()), theme.muted()),
        ]));

        for binding in &section.bindings {
            lines.push(Line::from(vec![
                Span::raw(LEFT_PADDING),
                Span::styled(format!("{:<16}", binding.keys), theme.key_hint()),
                Span::styled(binding.description, theme.key_description()),
            ]));
        }

        lines.push(Line::default());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::GlobalAction;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_navigation_scrolls_panel() {
        let view = KeyBindingsView::new();
        let state = AppState::default();

        assert!(matches!(
            view.translate_navigation(NavigationAction::Next, &state),
            Some(Action::KeyBindings(KeyBindingsAction::NavigateNext))
        ));
        assert!(view
            .translate_navigation(NavigationAction::Left, &state)
            .is_none());
    }

    #[test]
    fn test_only_panel_and_global_actions_accepted() {
        let view = KeyBindingsView::new();
        assert!(view.accepts_action(&Action::Global(GlobalAction::Close)));
        assert!(!view.accepts_action(&Action::ExamplePicker(
            crate::actions::ExamplePickerAction::Confirm
        )));
    }

    #[test]
    fn test_renders_sections() {
        let mut terminal = Terminal::new(TestBackend::new(100, 50)).unwrap();
        let state = AppState::default();
        terminal
            .draw(|f| KeyBindingsView::new().render(&state, f.area(), f))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = (0..buffer.area.height)
            .flat_map(|y| (0..buffer.area.width).map(move |x| (x, y)))
            .map(|pos| buffer[pos].symbol().to_string())
            .collect();
        assert!(screen.contains("Workspace"));
    }
}
