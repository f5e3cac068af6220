use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::headers::ORIGINAL_ID;

/// A single cell as delivered by the upstream parser.
///
/// `Missing` covers both absent columns and upstream nulls; the display
/// string for either is decided by the value normalizer, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// The raw text when present.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            CellValue::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

/// One request record: a mandatory identifier plus named cells.
///
/// The identifier is stored out of band and read through [`Row::text`] and
/// [`Row::trimmed`] under the `Original ID` header. Cells not present in
/// the map read as [`CellValue::Missing`], so a row built from a sparse
/// source behaves the same as one with explicit missing markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    original_id: String,
    cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(original_id: impl Into<String>) -> Self {
        Self {
            original_id: original_id.into(),
            cells: BTreeMap::new(),
        }
    }

    /// The `Original ID` value the row was created with.
    pub fn original_id(&self) -> &str {
        &self.original_id
    }

    pub fn set(&mut self, header: impl Into<String>, value: CellValue) {
        self.cells.insert(header.into(), value);
    }

    /// Builder-style cell insertion, used heavily by tests.
    #[must_use]
    pub fn with(mut self, header: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(header, CellValue::text(value));
        self
    }

    /// The stored cell under `header`, missing when absent.
    pub fn cell(&self, header: &str) -> &CellValue {
        const MISSING: &CellValue = &CellValue::Missing;
        self.cells.get(header).unwrap_or(MISSING)
    }

    /// Raw text of a cell when present.
    pub fn text(&self, header: &str) -> Option<&str> {
        if header == ORIGINAL_ID {
            return Some(&self.original_id);
        }
        self.cells.get(header).and_then(CellValue::as_text)
    }

    /// Trimmed text of a cell, with absence reading as the empty string.
    ///
    /// All request-type comparisons go through this accessor so that a
    /// malformed upstream row (missing `Request Type`) compares as `""`
    /// instead of faulting.
    pub fn trimmed(&self, header: &str) -> &str {
        self.text(header).map(str::trim).unwrap_or("")
    }

    /// Headers with an explicit cell entry on this row.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }
}
