//! Status Bar Widget
//!
//! Renders the status bar at the bottom of the screen.
//! Format: `[timestamp] icon message                     [source]`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use unicode_width::UnicodeWidthStr;

/// Widget for rendering the status bar
pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        if area.height < 1 || area.width < 4 {
            return;
        }

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.bg_color).set_char(' ');
        }

        let right = area.x + area.width;
        let mut x = area.x + 1;

        if !vm.timestamp.is_empty() {
            let ts = format!("[{}] ", vm.timestamp);
            let (next_x, _) = buf.set_stringn(x, area.y, &ts, (right - x) as usize, vm.metadata_style);
            x = next_x;
        }

        let icon = format!("{} ", vm.icon);
        let (next_x, _) = buf.set_stringn(x, area.y, &icon, (right.saturating_sub(x)) as usize, vm.message_style);
        x = next_x;

        let source = if vm.source.is_empty() {
            String::new()
        } else {
            format!("[{}]", vm.source)
        };
        let source_width = source.width() as u16;

        // Message gets whatever the source label leaves over
        let available = right.saturating_sub(x + source_width + 2) as usize;
        if vm.message.width() > available {
            let truncated: String = vm.message.chars().take(available.saturating_sub(1)).collect();
            buf.set_stringn(x, area.y, format!("{truncated}…"), available, vm.message_style);
        } else {
            buf.set_string(x, area.y, &vm.message, vm.message_style);
        }

        if source_width > 0 && source_width + 1 < area.width {
            let source_x = right - source_width - 1;
            buf.set_string(source_x, area.y, &source, vm.metadata_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Style};

    fn vm(message: &str, source: &str) -> StatusBarViewModel {
        StatusBarViewModel {
            icon: "✔",
            message: message.to_string(),
            timestamp: "12:00:00".to_string(),
            source: source.to_string(),
            message_style: Style::default(),
            bg_color: Color::Reset,
            metadata_style: Style::default(),
        }
    }

    fn row(buf: &Buffer) -> String {
        (0..buf.area.width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_renders_message_and_source() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget(&vm("Documents are identical", "Compare")).render(area, &mut buf);

        let text = row(&buf);
        assert!(text.contains("[12:00:00]"));
        assert!(text.contains("Documents are identical"));
        assert!(text.trim_end().ends_with("[Compare]"));
    }

    #[test]
    fn test_long_message_is_truncated() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget(&vm(&"x".repeat(100), "Compare")).render(area, &mut buf);

        let text = row(&buf);
        assert!(text.contains('…'));
        assert!(text.contains("[Compare]"));
    }
}
