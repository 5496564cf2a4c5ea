//! Export formats, filenames and the standalone document template.

use crate::file_io::{MIME_HTML, MIME_JSON};
use chrono::{DateTime, SecondsFormat, Utc};
use json_diff_viewer::{DiffResult, RenderTheme};

const FILENAME_PREFIX: &str = "diff-result-";
pub const DOCUMENT_TITLE: &str = "JSON Diff Result";

/// What an export produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// The diff result serialized as JSON.
    Data,
    /// Self-contained HTML page embedding the rendered output.
    Document,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Data => "json",
            Self::Document => "html",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::Data => MIME_JSON,
            Self::Document => MIME_HTML,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Data => "JSON",
            Self::Document => "HTML",
        }
    }
}

/// `diff-result-<timestamp>.<ext>` where the timestamp is ISO 8601 in UTC
/// with millisecond precision and every `:` and `.` replaced by `-`.
pub fn timestamped_filename(now: DateTime<Utc>, format: ExportFormat) -> String {
    let stamp = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{FILENAME_PREFIX}{stamp}.{}", format.extension())
}

/// Serialize a result for data export.
pub fn data_content(result: &DiffResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

/// Wrap rendered markup into a complete HTML document.
pub fn document_content(markup: &str, theme: RenderTheme) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{DOCUMENT_TITLE}</title>
  <style>
{STYLESHEET}  </style>
</head>
<body class="theme-{theme}">
  <h1>{DOCUMENT_TITLE}</h1>
{markup}</body>
</html>
"#,
        theme = theme.as_str(),
    )
}

const STYLESHEET: &str = r#"    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', 'Ubuntu',
        'Helvetica Neue', sans-serif;
      padding: 2rem;
      background-color: #f5f5f5;
    }
    body.theme-dark {
      background-color: #1e1e1e;
      color: #d4d4d4;
    }
    .json-diff-container {
      font-family: 'Monaco', 'Menlo', 'Ubuntu Mono', 'Consolas', monospace;
      font-size: 14px;
      line-height: 1.6;
      background-color: white;
      padding: 1rem;
      border-radius: 8px;
      box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
    }
    .json-diff-container.theme-dark {
      background-color: #252526;
    }
    .json-diff-stats {
      display: flex;
      gap: 1rem;
      padding: 0.5rem 0;
      margin-bottom: 1rem;
      border-bottom: 1px solid #e0e0e0;
    }
    .diff-line {
      display: flex;
      align-items: center;
      padding: 2px 0;
      min-height: 24px;
    }
    .toggle-button {
      margin-right: 4px;
      font-size: 12px;
      width: 16px;
      height: 16px;
      border: none;
      background: transparent;
      color: inherit;
    }
    .key {
      font-weight: 600;
      margin-right: 4px;
    }
    .old-value {
      text-decoration: line-through;
      opacity: 0.7;
    }
    .arrow {
      margin: 0 8px;
      font-weight: bold;
    }
    .new-value {
      font-weight: 600;
    }
    .added { color: #22863a; }
    .deleted { color: #cb2431; }
    .modified { color: #b08800; }
    .unchanged { color: #6a737d; }
    .deleted .value { text-decoration: line-through; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap() + chrono::Duration::milliseconds(678)
    }

    #[test]
    fn test_timestamped_filename() {
        assert_eq!(
            timestamped_filename(fixed_time(), ExportFormat::Data),
            "diff-result-2024-01-02T03-04-05-678Z.json"
        );
        assert_eq!(
            timestamped_filename(fixed_time(), ExportFormat::Document),
            "diff-result-2024-01-02T03-04-05-678Z.html"
        );
    }

    #[test]
    fn test_document_template() {
        let doc = document_content("<div class=\"json-diff-container\"></div>\n", RenderTheme::Light);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>JSON Diff Result</title>"));
        assert!(doc.contains("<h1>JSON Diff Result</h1>"));
        assert!(doc.contains("<div class=\"json-diff-container\"></div>"));
        assert!(doc.contains(".json-diff-stats {"));
        assert!(doc.contains("<body class=\"theme-light\">"));
    }

    #[test]
    fn test_format_metadata() {
        assert_eq!(ExportFormat::Data.mime(), "application/json");
        assert_eq!(ExportFormat::Document.mime(), "text/html");
    }
}
