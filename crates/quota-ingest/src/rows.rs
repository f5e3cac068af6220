use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use serde_json::Value;
use tracing::debug;

use quota_model::{CellValue, ORIGINAL_ID, Row};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn cell_from_text(raw: &str) -> CellValue {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        CellValue::Missing
    } else {
        CellValue::Text(trimmed.to_string())
    }
}

/// Reads request rows from a CSV file whose first record is the header row.
///
/// The identifier column is mandatory; every other column is carried as-is.
/// Empty cells become [`CellValue::Missing`] so later stages can tell an
/// absent value from a present empty string.
pub fn read_rows_csv(path: &Path) -> Result<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read csv headers: {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();
    let Some(id_index) = headers.iter().position(|header| header == ORIGINAL_ID) else {
        bail!(
            "missing '{ORIGINAL_ID}' column in {} (found: {})",
            path.display(),
            headers.join(", ")
        );
    };

    let mut rows = Vec::new();
    for (record_number, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let id = record
            .get(id_index)
            .map(|value| value.trim().trim_matches('\u{feff}'))
            .unwrap_or("");
        if id.is_empty() {
            bail!(
                "record {} of {} has no '{ORIGINAL_ID}' value",
                record_number + 1,
                path.display()
            );
        }
        let mut row = Row::new(id);
        for (idx, header) in headers.iter().enumerate() {
            if idx == id_index || header.is_empty() {
                continue;
            }
            let value = record.get(idx).unwrap_or("");
            row.set(header, cell_from_text(value));
        }
        rows.push(row);
    }
    debug!(rows = rows.len(), path = %path.display(), "loaded csv rows");
    Ok(rows)
}

fn json_cell(value: &Value) -> Result<CellValue> {
    match value {
        Value::Null => Ok(CellValue::Missing),
        Value::String(text) => Ok(cell_from_text(text)),
        Value::Number(number) => Ok(CellValue::Text(number.to_string())),
        Value::Bool(flag) => Ok(CellValue::Text(flag.to_string())),
        Value::Array(_) | Value::Object(_) => bail!("nested values are not valid cells"),
    }
}

fn json_row_id(object: &serde_json::Map<String, Value>) -> Result<String> {
    match object.get(ORIGINAL_ID) {
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                bail!("empty '{ORIGINAL_ID}' value");
            }
            Ok(trimmed.to_string())
        }
        Some(Value::Number(number)) => Ok(number.to_string()),
        Some(_) => bail!("'{ORIGINAL_ID}' must be a string or number"),
        None => bail!("missing '{ORIGINAL_ID}' key"),
    }
}

/// Reads request rows from a JSON array of flat objects.
///
/// This mirrors the shape the upstream parser hands over: one object per
/// row, headers as keys. `null` maps to a missing cell; numbers and
/// booleans are carried as their text rendering.
pub fn read_rows_json(path: &Path) -> Result<Vec<Row>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read json: {}", path.display()))?;
    let parsed: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse json: {}", path.display()))?;
    let Value::Array(items) = parsed else {
        bail!("{} must contain a top-level array of rows", path.display());
    };

    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Value::Object(object) = item else {
            bail!("row {} of {} is not an object", index + 1, path.display());
        };
        let id = json_row_id(object)
            .with_context(|| format!("row {} of {}", index + 1, path.display()))?;
        let mut row = Row::new(id);
        for (key, value) in object {
            let header = normalize_header(key);
            if header == ORIGINAL_ID || header.is_empty() {
                continue;
            }
            let cell = json_cell(value).with_context(|| {
                format!("row {} column '{header}' of {}", index + 1, path.display())
            })?;
            row.set(header, cell);
        }
        rows.push(row);
    }
    debug!(rows = rows.len(), path = %path.display(), "loaded json rows");
    Ok(rows)
}

/// Loads request rows, dispatching on the file extension.
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "csv" => read_rows_csv(path),
        "json" => read_rows_json(path),
        other => bail!(
            "unsupported rows file '{}': expected .csv or .json, got '.{other}'",
            path.display()
        ),
    }
}
