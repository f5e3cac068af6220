use quota_model::{Dictionary, Locale, ORIGINAL_ID, RDQUOTA, Row, UNKNOWN_EN, UNKNOWN_PT};

use crate::masking::mask;
use crate::normalize::normalize;
use crate::translate::{translate_header, translate_value};

/// Ordered header→value projection of one row, ready to render or export.
///
/// Keys may be translated header names; the identifier key is always first
/// and always the untranslated `Original ID`. Every projection over the same
/// header list yields the same key set, masked rows included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    entries: Vec<(String, String)>,
}

impl DisplayRow {
    /// Value under a display key, if the key exists in this projection.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, value)| value.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Projection switches that vary per view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionOptions {
    /// Render cell values equal to the "Unknown" sentinel as empty strings.
    /// On for unified views, off for per-category views.
    pub blank_unknown_values: bool,
}

/// Projects one row over the visible headers.
///
/// Per header, in order: read the raw cell, apply the zonal mask, normalize
/// to a display string, then translate value and header once when the locale
/// asks for it. The identifier is seeded first and bypasses every step.
pub fn project(
    row: &Row,
    visible_headers: &[String],
    dictionary: &Dictionary,
    locale: Locale,
    options: ProjectionOptions,
) -> DisplayRow {
    let mut entries = Vec::with_capacity(visible_headers.len() + 1);
    entries.push((ORIGINAL_ID.to_string(), row.original_id().to_string()));
    for header in visible_headers {
        if header == ORIGINAL_ID {
            continue;
        }
        let masked = mask(row, header, row.cell(header).clone());
        let mut value = normalize(&masked);
        if options.blank_unknown_values {
            let trimmed = value.trim();
            if trimmed == UNKNOWN_EN || trimmed == UNKNOWN_PT {
                value.clear();
            }
        }
        let value = translate_value(dictionary, locale, &value).to_string();
        let key = translate_header(dictionary, locale, header).to_string();
        entries.push((key, value));
    }
    DisplayRow { entries }
}

/// Projects every row over the same header list.
pub fn project_all(
    rows: &[Row],
    visible_headers: &[String],
    dictionary: &Dictionary,
    locale: Locale,
    options: ProjectionOptions,
) -> Vec<DisplayRow> {
    rows.iter()
        .map(|row| project(row, visible_headers, dictionary, locale, options))
        .collect()
}

/// The display-key list a projection over `visible_headers` produces.
///
/// Matches [`project`] exactly: identifier pinned first and untranslated,
/// then each visible header under its locale key.
pub fn display_headers(
    dictionary: &Dictionary,
    locale: Locale,
    visible_headers: &[String],
) -> Vec<String> {
    let mut keys = Vec::with_capacity(visible_headers.len() + 1);
    keys.push(ORIGINAL_ID.to_string());
    for header in visible_headers {
        if header == ORIGINAL_ID {
            continue;
        }
        keys.push(translate_header(dictionary, locale, header).to_string());
    }
    keys
}

/// Header list for the unified-by-identifier view: the derived `RDQuota`
/// column first, then the canonical headers.
pub fn unified_headers(headers: &[String]) -> Vec<String> {
    let mut unified = Vec::with_capacity(headers.len() + 1);
    unified.push(RDQUOTA.to_string());
    unified.extend(headers.iter().cloned());
    unified
}

/// Copies the row identifier into the derived `RDQuota` cell so a request
/// can be traced across categorized and unified tables by a stable key.
pub fn with_identifier_column(row: &Row) -> Row {
    let id = row.original_id().to_string();
    row.clone().with(RDQUOTA, id)
}
