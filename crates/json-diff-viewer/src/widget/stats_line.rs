use crate::model::{ChangeKind, DiffStats};
use crate::traits::ThemeProvider;
use ratatui::prelude::*;

/// `+added -deleted ~modified =unchanged`, each count in its change colour.
pub fn stats_line<T: ThemeProvider + ?Sized>(stats: &DiffStats, theme: &T) -> Line<'static> {
    let entry = |kind: ChangeKind, count: usize| {
        Span::styled(
            format!("{}{} ", symbol(kind), count),
            Style::default()
                .fg(theme.change_foreground(kind))
                .add_modifier(Modifier::BOLD),
        )
    };

    Line::from(vec![
        entry(ChangeKind::Added, stats.added),
        entry(ChangeKind::Deleted, stats.deleted),
        entry(ChangeKind::Modified, stats.modified),
        entry(ChangeKind::Unchanged, stats.unchanged),
    ])
}

fn symbol(kind: ChangeKind) -> char {
    match kind {
        ChangeKind::Unchanged => '=',
        other => other.marker(),
    }
}
