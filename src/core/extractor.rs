//! Line extraction: raw upload bytes to a deduplicated [`LineSet`].

use crate::domain::model::LineSet;
use crate::utils::error::{CompareError, Result};
use std::collections::HashSet;

const UTF8_BOM: &str = "\u{feff}";

/// 從原始內容建立 LineSet
///
/// `\n` and `\r\n` are both line boundaries and a trailing boundary does not
/// add an empty line. Content is otherwise taken verbatim. Repeated lines keep
/// their first position only.
pub fn extract_lines(field: &str, raw: Option<&[u8]>) -> Result<LineSet> {
    let raw = raw.ok_or_else(|| CompareError::invalid_input(field, "file is missing"))?;

    let text = std::str::from_utf8(raw).map_err(|e| {
        CompareError::invalid_input(field, format!("file is not valid UTF-8 text: {}", e))
    })?;
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

    let mut seen = HashSet::new();
    let mut lines = Vec::new();
    for line in text.lines() {
        if seen.insert(line) {
            lines.push(line.to_string());
        }
    }

    tracing::debug!(
        "Extracted {} distinct lines from '{}' ({} bytes)",
        lines.len(),
        field,
        raw.len()
    );

    Ok(LineSet::from_unique_lines(lines))
}
