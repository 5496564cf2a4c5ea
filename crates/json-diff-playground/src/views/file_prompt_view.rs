//! File Prompt View
//!
//! Directory browser used to pick the file to import. Typing filters the
//! listing; Enter opens a directory or imports the highlighted file.

use crate::actions::{Action, FilePromptAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::views::{popup_area, View, ViewId};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct FilePromptView;

impl FilePromptView {
    pub fn new() -> Self {
        Self
    }
}

impl View for FilePromptView {
    fn view_id(&self) -> ViewId {
        ViewId::FilePrompt
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT | PanelCapabilities::ITEM_NAVIGATION
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction, _state: &AppState) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => FilePromptAction::NavigateNext,
            NavigationAction::Previous => FilePromptAction::NavigatePrevious,
            _ => return None,
        };
        Some(Action::FilePrompt(action))
    }

    fn translate_text_input(&self, input: TextInputAction, _state: &AppState) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => FilePromptAction::Char(c),
            TextInputAction::Backspace => FilePromptAction::Backspace,
            TextInputAction::ClearLine => FilePromptAction::ClearLine,
            TextInputAction::Confirm => FilePromptAction::Confirm,
            TextInputAction::Escape => FilePromptAction::Cancel,
            TextInputAction::Paste(_) | TextInputAction::Delete | TextInputAction::MoveCaret(_) => {
                return None
            }
        };
        Some(Action::FilePrompt(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::FilePrompt(_) | Action::Navigate(_) | Action::TextInput(_) | Action::Global(_)
        )
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let prompt = &state.file_prompt;
    let popup = popup_area(area, area.width * 7 / 10, area.height * 7 / 10, f);

    let footer = Line::from(vec![
        Span::styled(" Enter", theme.key_hint()),
        Span::styled(" open  ", theme.muted()),
        Span::styled("↑/↓", theme.key_hint()),
        Span::styled(" select  ", theme.muted()),
        Span::styled("Esc", theme.key_hint()),
        Span::styled(" cancel ", theme.muted()),
    ]);
    let block = Block::default()
        .title(format!(" Import into {} ", prompt.side.label()))
        .title_style(theme.panel_title())
        .title_bottom(footer)
        .borders(Borders::ALL)
        .border_style(theme.panel_border(true))
        .style(theme.panel_background());
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let [dir_area, filter_area, list_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", prompt.listing.dir.display()),
            theme.muted(),
        )),
        dir_area,
    );
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" > ", theme.key_hint()),
            Span::raw(prompt.filter.clone()),
            Span::styled("█", theme.key_hint()),
        ])),
        filter_area,
    );

    let visible = prompt.visible();
    if visible.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(" No matching files", theme.muted())),
            list_area,
        );
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|entry| {
            let style = if entry.is_dir {
                theme.info()
            } else {
                theme.base()
            };
            ListItem::new(Span::styled(format!(" {}", entry.label), style))
        })
        .collect();
    let mut list_state = ListState::default().with_selected(Some(prompt.selected));
    f.render_stateful_widget(
        List::new(items).highlight_style(theme.selected()),
        list_area,
        &mut list_state,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_cancels_and_enter_confirms() {
        let view = FilePromptView::new();
        let state = AppState::default();
        assert!(matches!(
            view.translate_text_input(TextInputAction::Escape, &state),
            Some(Action::FilePrompt(FilePromptAction::Cancel))
        ));
        assert!(matches!(
            view.translate_text_input(TextInputAction::Confirm, &state),
            Some(Action::FilePrompt(FilePromptAction::Confirm))
        ));
        assert!(view.capabilities(&state).supports_item_navigation());
    }
}
