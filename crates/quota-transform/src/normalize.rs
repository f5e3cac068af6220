use quota_model::CellValue;

/// Canonical display string for a single cell.
///
/// Missing cells and whitespace-only text render as the empty string, never
/// the literal "null" or "undefined" an upstream dump might suggest. All
/// other text passes through verbatim. Total over every cell shape, so
/// callers never branch on presence.
pub fn normalize(value: &CellValue) -> String {
    match value.as_text() {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => String::new(),
    }
}
