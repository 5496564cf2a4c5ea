//! HTML rendition of flattened diff lines.

use super::{LineBody, RenderConfig, RenderedLine};
use crate::model::DiffStats;
use html_escape::encode_double_quoted_attribute as escape;
use std::fmt::Write;

const INDENT_PX: usize = 16;

pub(super) fn render(config: &RenderConfig, stats: &DiffStats, lines: &[RenderedLine]) -> String {
    let mut html = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        html,
        r#"<div class="json-diff-container theme-{}">"#,
        config.theme.as_str()
    );
    let _ = writeln!(
        html,
        concat!(
            r#"  <div class="json-diff-stats">"#,
            r#"<span class="added">+{}</span>"#,
            r#"<span class="deleted">-{}</span>"#,
            r#"<span class="modified">~{}</span>"#,
            r#"<span class="unchanged">={}</span>"#,
            "</div>"
        ),
        stats.added, stats.deleted, stats.modified, stats.unchanged
    );
    for line in lines {
        let _ = writeln!(html, "  {}", render_line(line));
    }
    html.push_str("</div>\n");
    html
}

fn render_line(line: &RenderedLine) -> String {
    let mut html = format!(
        r#"<div class="diff-line {}" style="padding-left: {}px">"#,
        line.kind.css_class(),
        line.depth * INDENT_PX
    );

    if let LineBody::Open { expanded, .. } = line.body {
        let glyph = if expanded { "\u{25bc}" } else { "\u{25b6}" };
        let _ = write!(html, r#"<button class="toggle-button">{glyph}</button>"#);
    }
    if let Some(label) = line.label() {
        let _ = write!(html, r#"<span class="key">{}</span>"#, escape(&label));
    }

    match &line.body {
        LineBody::Open {
            container,
            expanded,
            hidden,
        } => {
            let (open, close) = container.brackets();
            if *expanded {
                html.push_str(open);
            } else {
                let _ = write!(html, "{open} \u{2026} {close} ({hidden})");
            }
        }
        LineBody::Close(container) => html.push_str(container.brackets().1),
        LineBody::Value(value) => {
            let _ = write!(
                html,
                r#"<span class="value">{}</span>"#,
                escape(&value.to_string())
            );
        }
        LineBody::Change { old, new } => {
            let _ = write!(
                html,
                concat!(
                    r#"<span class="old-value">{}</span>"#,
                    r#"<span class="arrow">&rarr;</span>"#,
                    r#"<span class="new-value">{}</span>"#
                ),
                escape(&old.to_string()),
                escape(&new.to_string())
            );
        }
    }

    html.push_str("</div>");
    html
}
