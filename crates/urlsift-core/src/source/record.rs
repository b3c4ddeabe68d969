//! Line extraction for plain and JSON-lines input.

use serde_json::Value;

use crate::engine::SkipReason;

/// How source lines are interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceMode {
    /// One URL per line.
    Plain,
    /// One JSON object per line; the URL is the string at this field.
    JsonField(String),
}

impl SourceMode {
    /// Plain mode when `field` is absent or empty, JSON mode otherwise.
    pub fn from_field(field: Option<&str>) -> Self {
        match field.map(str::trim) {
            Some(f) if !f.is_empty() => SourceMode::JsonField(f.to_string()),
            _ => SourceMode::Plain,
        }
    }
}

/// One candidate: the URL to classify and the text to emit if it survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub url: String,
    pub output: String,
}

impl SourceRecord {
    pub fn plain(url: &str) -> Self {
        Self {
            url: url.to_string(),
            output: url.to_string(),
        }
    }
}

/// Turns one source line into a candidate.
///
/// Returns `Ok(None)` for blank lines, which are ignored in both modes.
pub fn extract_record(line: &str, mode: &SourceMode) -> Result<Option<SourceRecord>, SkipReason> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match mode {
        SourceMode::Plain => Ok(Some(SourceRecord::plain(trimmed))),
        SourceMode::JsonField(field) => {
            let value: Value =
                serde_json::from_str(trimmed).map_err(|_| SkipReason::MalformedJson)?;
            let object = value.as_object().ok_or(SkipReason::MalformedJson)?;
            let url = object
                .get(field)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or(SkipReason::MissingField)?;
            Ok(Some(SourceRecord {
                url: url.to_string(),
                output: line.to_string(),
            }))
        }
    }
}
