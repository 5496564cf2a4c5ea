//! Workspace View
//!
//! The base screen: toolbar, the two editors, the statistics line, the
//! result pane and the status bar.

use crate::actions::{
    Action, ContextAction, EditorAction, FilePromptAction, FocusAction, GlobalAction,
    NavigationAction, ResultPaneAction, TextInputAction,
};
use crate::capabilities::PanelCapabilities;
use crate::state::{AppState, Pane};
use crate::view_models::{EditorPaneViewModel, StatusBarViewModel, ToolbarViewModel};
use crate::views::status_bar::StatusBarWidget;
use crate::views::{View, ViewId};
use json_diff_theme::Theme;
use json_diff_viewer::{stats_line, DiffTreeWidget};
use json_diff_workspace::{Outcome, Side, WorkspaceError};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct WorkspaceView;

impl WorkspaceView {
    pub fn new() -> Self {
        Self
    }
}

impl View for WorkspaceView {
    fn view_id(&self) -> ViewId {
        ViewId::Workspace
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, state: &AppState) -> PanelCapabilities {
        match state.focus {
            Pane::Original | Pane::New => {
                PanelCapabilities::TEXT_INPUT | PanelCapabilities::MULTILINE_TEXT
            }
            Pane::Result => {
                PanelCapabilities::SCROLL_VERTICAL | PanelCapabilities::VIM_NAVIGATION_BINDINGS
            }
        }
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction, state: &AppState) -> Option<Action> {
        if state.focus != Pane::Result {
            return None;
        }
        let action = match nav {
            NavigationAction::Next => ResultPaneAction::NavigateNext,
            NavigationAction::Previous => ResultPaneAction::NavigatePrevious,
            NavigationAction::ToTop => ResultPaneAction::NavigateToTop,
            NavigationAction::ToBottom => ResultPaneAction::NavigateToBottom,
            NavigationAction::Left | NavigationAction::Right => return None,
        };
        Some(Action::ResultPane(action))
    }

    fn translate_text_input(&self, input: TextInputAction, state: &AppState) -> Option<Action> {
        state.focus.side()?;
        let edit = match input {
            TextInputAction::Char(c) => EditorAction::Insert(c.to_string()),
            TextInputAction::Paste(text) => EditorAction::Insert(text),
            TextInputAction::Backspace => EditorAction::Backspace,
            TextInputAction::Delete => EditorAction::Delete,
            TextInputAction::ClearLine => EditorAction::ClearLine,
            TextInputAction::MoveCaret(movement) => EditorAction::MoveCaret(movement),
            TextInputAction::Confirm => EditorAction::Newline,
            // Leave the editor for the result pane
            TextInputAction::Escape => {
                let focus = match state.focus {
                    Pane::Original => FocusAction::Previous,
                    _ => FocusAction::Next,
                };
                return Some(Action::Focus(focus));
            }
        };
        Some(Action::Editor(edit))
    }

    fn translate_context_action(&self, _action: ContextAction, state: &AppState) -> Option<Action> {
        (state.focus == Pane::Result).then_some(Action::ResultPane(ResultPaneAction::ToggleNode))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Workspace(_)
                | Action::Editor(_)
                | Action::Focus(_)
                | Action::Navigate(_)
                | Action::ViewContext(_)
                | Action::FilePrompt(FilePromptAction::Open)
                | Action::Global(GlobalAction::PushView(_) | GlobalAction::Quit)
        )
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    f.render_widget(Block::default().style(theme.base()), area);

    let [toolbar_area, editors_area, stats_area, result_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Percentage(45),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    render_toolbar(state, theme, toolbar_area, f);

    let [left_area, right_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(editors_area);
    render_editor(state, theme, Side::Left, left_area, f);
    render_editor(state, theme, Side::Right, right_area, f);

    render_stats(state, theme, stats_area, f);
    render_result(state, theme, result_area, f);

    let status = StatusBarViewModel::from_state(state);
    f.render_widget(StatusBarWidget(&status), status_area);
}

fn render_toolbar(state: &AppState, theme: &Theme, area: Rect, f: &mut Frame) {
    let vm = ToolbarViewModel::from_state(state);

    let mut spans = vec![Span::raw(" ")];
    for entry in &vm.entries {
        let (key_style, label_style) = if entry.enabled {
            (theme.key_hint(), theme.key_description())
        } else {
            (theme.disabled(), theme.disabled())
        };
        spans.push(Span::styled(entry.hint.clone(), key_style));
        spans.push(Span::styled(format!(" {}  ", entry.label), label_style));
    }

    let example = match vm.example {
        Some((name, description)) => Line::from(vec![
            Span::styled(format!(" {name}: "), theme.panel_title()),
            Span::styled(description, theme.muted()),
        ]),
        None => Line::default(),
    };

    f.render_widget(Paragraph::new(vec![Line::from(spans), example]), area);
}

fn render_editor(state: &AppState, theme: &Theme, side: Side, area: Rect, f: &mut Frame) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);

    let probe = EditorPaneViewModel::from_state(state, side, inner.width as usize, 1);
    // The badge takes the last row of the pane
    let text_height = if probe.badge.is_some() {
        inner.height.saturating_sub(1)
    } else {
        inner.height
    };
    let vm = EditorPaneViewModel::from_state(
        state,
        side,
        inner.width.saturating_sub(u16::from(state.preferences.minimap)) as usize,
        text_height as usize,
    );

    let mut title = vec![Span::styled(vm.title.clone(), theme.panel_title())];
    if vm.importing {
        title.push(Span::styled("importing… ", theme.warning()));
    }
    let block = block
        .title(Line::from(title))
        .title_bottom(Line::from(format!(" {} ", vm.position)).right_aligned())
        .border_style(theme.panel_border(vm.focused));

    let body: Vec<Line> = if vm.is_empty && !vm.focused {
        vec![Line::styled("Paste or type JSON here", theme.muted().italic())]
    } else {
        vm.lines.iter().map(|l| Line::raw(l.clone())).collect()
    };
    f.render_widget(block, area);
    let text_area = Rect {
        height: text_height,
        ..inner
    };
    f.render_widget(Paragraph::new(body), text_area);

    if let Some(badge) = &vm.badge {
        let location = badge
            .location
            .map(|(line, column)| format!(" ({line}, {column})"))
            .unwrap_or_default();
        let badge_line = Line::from(vec![
            Span::styled(" Syntax error ", theme.error().reversed()),
            Span::styled(format!(" {}{}", badge.message, location), theme.error()),
        ]);
        let badge_area = Rect {
            y: inner.y + text_height,
            height: 1,
            ..inner
        };
        f.render_widget(Paragraph::new(badge_line), badge_area);
    }

    if vm.minimap && vm.total_lines > text_height as usize {
        let mut scrollbar = ScrollbarState::new(vm.total_lines).position(vm.first_line);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            text_area,
            &mut scrollbar,
        );
    }

    if vm.focused && text_height > 0 {
        let (row, column) = vm.caret_in_viewport();
        let position = Position::new(text_area.x + column as u16, text_area.y + row as u16);
        if text_area.contains(position) {
            f.buffer_mut()[position].set_style(theme.cursor());
            f.set_cursor_position(position);
        }
    }
}

fn render_stats(state: &AppState, theme: &Theme, area: Rect, f: &mut Frame) {
    let line = match state.workspace.snapshot.state.result() {
        Some(result) => {
            let mut line = stats_line(&result.stats, theme);
            line.spans.insert(0, Span::raw(" "));
            line
        }
        None => Line::styled(" No comparison yet", theme.muted()),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_result(state: &AppState, theme: &Theme, area: Rect, f: &mut Frame) {
    let focused = state.focus == Pane::Result;

    if let Outcome::Errored(error) = state.workspace.snapshot.state.outcome() {
        render_error(error, theme, focused, area, f);
        return;
    }

    let lines = &state.workspace.snapshot.lines;
    let visible_rows = area.height.saturating_sub(2) as usize;
    let cursor = state.result_pane.cursor;
    let scroll = cursor.saturating_sub(visible_rows.saturating_sub(1));

    let widget = DiffTreeWidget::new(lines, theme)
        .cursor(cursor, scroll)
        .focused(focused)
        .title(Span::styled(" Result ", theme.panel_title()))
        .empty_message("Press F5 to compare");
    f.render_widget(widget, area);
}

fn render_error(error: &WorkspaceError, theme: &Theme, focused: bool, area: Rect, f: &mut Frame) {
    let mut text = vec![Line::styled(error.to_string(), theme.error())];
    if let WorkspaceError::Validation {
        line: Some(line),
        column: Some(column),
        ..
    } = error
    {
        text.push(Line::styled(
            format!("Line {line}, column {column}"),
            theme.muted(),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border(focused))
        .title(Span::styled(" Error ", theme.error()));
    f.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
