//! Widget for rendering flattened diff lines.

use crate::model::ChangeKind;
use crate::render::{LineBody, RenderedLine};
use crate::traits::ThemeProvider;
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

const INDENT: &str = "  ";

/// Widget for rendering the lines produced by a render surface.
pub struct DiffTreeWidget<'a, T: ThemeProvider + ?Sized> {
    lines: &'a [RenderedLine],
    cursor: usize,
    scroll_offset: usize,
    theme: &'a T,
    focused: bool,
    title: Option<Line<'a>>,
    empty_message: &'a str,
}

impl<'a, T: ThemeProvider + ?Sized> DiffTreeWidget<'a, T> {
    pub fn new(lines: &'a [RenderedLine], theme: &'a T) -> Self {
        Self {
            lines,
            cursor: 0,
            scroll_offset: 0,
            theme,
            focused: false,
            title: None,
            empty_message: "No result",
        }
    }

    pub fn cursor(mut self, cursor: usize, scroll_offset: usize) -> Self {
        self.cursor = cursor;
        self.scroll_offset = scroll_offset;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn title(mut self, title: impl Into<Line<'a>>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = message;
        self
    }

    fn line_spans(&self, line: &RenderedLine) -> Vec<Span<'static>> {
        let punctuation = Style::default().fg(self.theme.punctuation_foreground());
        let change = Style::default().fg(self.theme.change_foreground(line.kind));

        let mut spans = vec![
            Span::styled(format!("{} ", line.kind.marker()), change),
            Span::raw(INDENT.repeat(line.depth)),
        ];

        if let LineBody::Open { expanded, .. } = line.body {
            let glyph = if expanded { "\u{25be} " } else { "\u{25b8} " };
            spans.push(Span::styled(glyph, punctuation));
        }
        if let Some(label) = line.label() {
            spans.push(Span::styled(
                format!("{label} "),
                Style::default().fg(self.theme.key_foreground()),
            ));
        }

        match &line.body {
            LineBody::Open {
                container,
                expanded,
                hidden,
            } => {
                let (open, close) = container.brackets();
                if *expanded {
                    spans.push(Span::styled(open, punctuation));
                } else {
                    spans.push(Span::styled(format!("{open} \u{2026} {close}"), punctuation));
                    spans.push(Span::styled(format!(" ({hidden})"), change));
                }
            }
            LineBody::Close(container) => {
                spans.push(Span::styled(container.brackets().1, punctuation));
            }
            LineBody::Value(value) => {
                let mut style = change;
                if line.kind == ChangeKind::Deleted {
                    style = style.add_modifier(Modifier::CROSSED_OUT);
                }
                spans.push(Span::styled(value.to_string(), style));
            }
            LineBody::Change { old, new } => {
                spans.push(Span::styled(
                    old.to_string(),
                    Style::default()
                        .fg(self.theme.deleted_foreground())
                        .add_modifier(Modifier::CROSSED_OUT),
                ));
                spans.push(Span::styled(" \u{2192} ", punctuation));
                spans.push(Span::styled(
                    new.to_string(),
                    Style::default()
                        .fg(self.theme.added_foreground())
                        .add_modifier(Modifier::BOLD),
                ));
            }
        }
        spans
    }
}

impl<T: ThemeProvider + ?Sized> Widget for DiffTreeWidget<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_foreground(self.focused)));
        if let Some(title) = self.title.clone() {
            block = block.title(title);
        }

        let inner = block.inner(area);
        block.render(area, buf);

        if self.lines.is_empty() {
            let msg = self.empty_message;
            let x = inner.x + (inner.width.saturating_sub(msg.len() as u16)) / 2;
            let y = inner.y + inner.height / 2;
            buf.set_string(x, y, msg, Style::default().fg(Color::DarkGray));
            return;
        }

        let visible = self
            .lines
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(inner.height as usize);

        for (row, (index, line)) in visible.enumerate() {
            let y = inner.y + row as u16;
            let area = Rect::new(inner.x, y, inner.width, 1);
            let mut rendered = Line::from(self.line_spans(line));
            if self.focused && index == self.cursor {
                rendered = rendered.style(Style::default().bg(self.theme.cursor_background()));
                buf.set_style(area, Style::default().bg(self.theme.cursor_background()));
            }
            rendered.render(area, buf);
        }
    }
}
