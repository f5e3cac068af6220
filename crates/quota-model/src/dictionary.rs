//! Bilingual dictionary for header names and enumerable values.
//!
//! The dictionary is data, not code: the default asset is embedded at
//! compile time from `data/dictionary.json` and can be replaced from a
//! file so translations are auditable and extendable without a rebuild.
//! Lookups are soft: a missing key passes the input through unchanged.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::headers::{FINAL_HEADERS, ORIGINAL_ID, RDQUOTA};

/// Default canonical→translated map (en-US → pt-BR).
const EMBEDDED_DICTIONARY: &str = include_str!("../data/dictionary.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dictionary {
    entries: BTreeMap<String, String>,
}

impl Dictionary {
    /// Load the embedded default dictionary.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_DICTIONARY)
    }

    /// Parse a dictionary from JSON text and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: BTreeMap<String, String> = serde_json::from_str(json)?;
        let dictionary = Self { entries };
        dictionary.validate_header_translations()?;
        Ok(dictionary)
    }

    /// Load a replacement dictionary from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Soft lookup: the translated string when covered, else the input.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map_or(key, String::as_str)
    }

    /// Whether the dictionary covers `key` explicitly.
    pub fn covers(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reject dictionaries that map two display columns to one name.
    ///
    /// Projection relies on translated header keys staying collision-free;
    /// this is checked once at load time rather than on every call.
    fn validate_header_translations(&self) -> Result<()> {
        let mut seen: BTreeMap<&str, &str> = BTreeMap::new();
        for header in header_columns() {
            let translated = self.translate(header);
            if let Some(first) = seen.insert(translated, header) {
                return Err(ModelError::DuplicateHeaderTranslation {
                    translated: translated.to_string(),
                    first: first.to_string(),
                    second: header.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Every column name that may appear as a display-row key.
fn header_columns() -> impl Iterator<Item = &'static str> {
    [ORIGINAL_ID, RDQUOTA]
        .into_iter()
        .chain(FINAL_HEADERS.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soft_lookup_passes_unknown_keys_through() {
        let dictionary = Dictionary::embedded().unwrap();
        assert_eq!(dictionary.translate("Quota Increase"), "Aumento de Cota");
        assert_eq!(dictionary.translate("Quota Decrease"), "Quota Decrease");
        assert_eq!(dictionary.translate(""), "");
    }

    #[test]
    fn identity_entries_are_allowed() {
        // "Status" and "RDQuota" translate to themselves.
        let dictionary = Dictionary::embedded().unwrap();
        assert_eq!(dictionary.translate("Status"), "Status");
        assert_eq!(dictionary.translate("RDQuota"), "RDQuota");
    }

    #[test]
    fn colliding_header_translations_are_rejected_at_load() {
        let json = r#"{ "Zone": "Status" }"#;
        let error = Dictionary::from_json_str(json).unwrap_err();
        assert!(matches!(
            error,
            ModelError::DuplicateHeaderTranslation { .. }
        ));
    }

    #[test]
    fn malformed_json_is_a_load_error() {
        assert!(Dictionary::from_json_str("not json").is_err());
        assert!(Dictionary::from_json_str(r#"{"a": 1}"#).is_err());
    }
}
