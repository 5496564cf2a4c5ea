//! Structural validation of JSON text.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Outcome of validating one input's text.
///
/// Blank text is valid: it means "not provided yet", not "malformed".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationVerdict {
    pub valid: bool,
    pub message: Option<String>,
    /// 1-based line of the first syntax error.
    pub line: Option<usize>,
    /// 1-based column of the first syntax error.
    pub column: Option<usize>,
}

impl ValidationVerdict {
    pub fn valid() -> Self {
        Self {
            valid: true,
            ..Default::default()
        }
    }

    pub fn invalid(message: impl Into<String>, line: Option<usize>, column: Option<usize>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
            line,
            column,
        }
    }

    /// `line, column` when both are known.
    pub fn location(&self) -> Option<(usize, usize)> {
        self.line.zip(self.column)
    }
}

/// Validate `text` as a JSON document.
///
/// Never panics; every failure is captured into the verdict. The parser's
/// message is kept verbatim and its reported line and column are used as
/// the error location.
pub fn validate(text: &str) -> ValidationVerdict {
    if text.trim().is_empty() {
        return ValidationVerdict::valid();
    }

    match parse_document(text) {
        Ok(_) => ValidationVerdict::valid(),
        Err(e) => {
            // serde_json reports line 0 when no position is known
            let (line, column) = match e.line() {
                0 => (None, None),
                line => (Some(line), Some(e.column().max(1))),
            };
            ValidationVerdict::invalid(e.to_string(), line, column)
        }
    }
}

/// Parse `text` into a document, with no limit on nesting depth.
pub fn parse_document(text: &str) -> serde_json::Result<Value> {
    from_str_unbounded(text)
}

/// serde_json stops at 128 levels of nesting; the stacker grows the stack
/// on demand instead.
fn from_str_unbounded<T: DeserializeOwned>(text: &str) -> serde_json::Result<T> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// Pretty-print `text` with `indent` spaces. Text that does not parse is
/// returned unchanged.
pub fn format_json(text: &str, indent: usize) -> String {
    let Ok(value) = parse_document(text) else {
        return text.to_string();
    };

    let indent = " ".repeat(indent);
    let mut out = Vec::with_capacity(text.len());
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    if value.serialize(&mut serializer).is_err() {
        return text.to_string();
    }
    String::from_utf8(out).unwrap_or_else(|_| text.to_string())
}
