//! Example Picker View
//!
//! Floating list of the built-in examples with the highlighted example's
//! description underneath.

use crate::actions::{Action, ContextAction, ExamplePickerAction, NavigationAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::views::{popup_area, View, ViewId};
use json_diff_workspace::ExampleCatalog;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct ExamplePickerView;

impl ExamplePickerView {
    pub fn new() -> Self {
        Self
    }
}

impl View for ExamplePickerView {
    fn view_id(&self) -> ViewId {
        ViewId::ExamplePicker
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
            NavigationAction::Next => ExamplePickerAction::NavigateNext,
            NavigationAction::Previous => ExamplePickerAction::NavigatePrevious,
            NavigationAction::ToTop => ExamplePickerAction::NavigateToTop,
            NavigationAction::ToBottom => ExamplePickerAction::NavigateToBottom,
            NavigationAction::Left | NavigationAction::Right => return None,
        };
        Some(Action::ExamplePicker(action))
    }

    fn translate_context_action(&self, _action: ContextAction, _state: &AppState) -> Option<Action> {
        Some(Action::ExamplePicker(ExamplePickerAction::Confirm))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::ExamplePicker(_)
                | Action::Navigate(_)
                | Action::ViewContext(_)
                | Action::Global(_)
        )
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let examples = ExampleCatalog::builtin().all();
    let popup = popup_area(area, 60, examples.len() as u16 + 7, f);

    let footer = Line::from(vec![
        Span::styled(" Enter", theme.key_hint()),
        Span::styled(" load  ", theme.muted()),
        Span::styled("Esc", theme.key_hint()),
        Span::styled(" cancel ", theme.muted()),
    ]);
    let block = Block::default()
        .title(" Load Example ")
        .title_style(theme.panel_title())
        .title_alignment(Alignment::Center)
        .title_bottom(footer)
        .borders(Borders::ALL)
        .border_style(theme.panel_border(true))
        .style(theme.panel_background());
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let [list_area, description_area] =
        Layout::vertical([Constraint::Length(examples.len() as u16), Constraint::Min(1)])
            .spacing(1)
            .areas(inner);

    let items: Vec<ListItem> = examples
        .iter()
        .map(|example| ListItem::new(format!(" {}", example.name)))
        .collect();
    let selected = state.example_picker.selected.min(examples.len().saturating_sub(1));
    let mut list_state = ListState::default().with_selected(Some(selected));
    f.render_stateful_widget(
        List::new(items).highlight_style(theme.selected()),
        list_area,
        &mut list_state,
    );

    if let Some(example) = examples.get(selected) {
        f.render_widget(
            Paragraph::new(Span::styled(format!(" {}", example.description), theme.muted()))
                .wrap(Wrap { trim: true }),
            description_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_and_confirm() {
        let view = ExamplePickerView::new();
        let state = AppState::default();
        assert!(matches!(
            view.translate_navigation(NavigationAction::Previous, &state),
            Some(Action::ExamplePicker(ExamplePickerAction::NavigatePrevious))
        ));
        assert!(matches!(
            view.translate_context_action(ContextAction::ToggleSelect, &state),
            Some(Action::ExamplePicker(ExamplePickerAction::Confirm))
        ));
        assert!(!view.accepts_action(&Action::Workspace(
            json_diff_workspace::WorkspaceAction::Compare
        )));
    }
}
