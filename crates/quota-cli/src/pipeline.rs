//! View assembly pipeline with explicit stages.
//!
//! Every command walks the same stages in order:
//! 1. **Load**: read the request dump and the translation dictionary
//! 2. **Prepare**: validity filter plus visible-header resolution
//! 3. **Project**: per-view Display Row projection (mask, normalize,
//!    translate)
//! 4. **Package**: title, display headers, and export filename per view
//!
//! Stages are pure given their inputs; rendering and side effects stay in
//! the command layer.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use quota_export::{ExportView, export_filename};
use quota_model::{Dictionary, Locale, Row, final_headers};
use quota_transform::{
    DisplayRow, ProjectionOptions, categorize, category_count, display_headers, filter_valid,
    presentable_categories, project_all, resolve_visible, translate_value, unified_headers,
    with_identifier_column,
};

/// Canonical title of the unified view; translated per locale at render time.
const UNIFIED_TITLE: &str = "Unified Table";
/// Canonical title of the identifier-prefixed unified view.
const UNIFIED_BY_ID_TITLE: &str = "Unified Table (with IDs)";

/// Valid rows plus the visible header set every view projects over.
#[derive(Debug, Clone)]
pub struct PreparedBatch {
    /// Rows that passed the validity filter, input order preserved.
    pub rows: Vec<Row>,
    /// Visible headers after the resolver seam (canonical order).
    pub visible: Vec<String>,
}

/// One fully projected table, ready for the terminal, clipboard, or disk.
#[derive(Debug, Clone)]
pub struct TableView {
    /// Human title: a category label, or the unified-table title.
    pub title: String,
    /// Display keys in column order, identifier first.
    pub headers: Vec<String>,
    /// One projected entry per row.
    pub rows: Vec<DisplayRow>,
    /// Locale-tagged workbook filename for file exports.
    pub filename: String,
}

/// The stat block shown after table-producing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCounts {
    /// Valid rows feeding every view.
    pub rows: usize,
    /// Presentable categories (Unknown buckets excluded).
    pub categories: usize,
    /// Visible data columns; the derived identifier counts when present.
    pub columns: usize,
}

/// Load the translation dictionary: the embedded asset, or a replacement
/// file when one is given.
pub fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    match path {
        Some(path) => {
            let dictionary = Dictionary::from_path(path)
                .with_context(|| format!("load dictionary {}", path.display()))?;
            debug!(path = %path.display(), entries = dictionary.len(), "dictionary loaded");
            Ok(dictionary)
        }
        None => Dictionary::embedded().context("load embedded dictionary"),
    }
}

/// Filter invalid rows and resolve the visible header set.
pub fn prepare(rows: &[Row]) -> PreparedBatch {
    let valid = filter_valid(rows);
    let visible = resolve_visible(&final_headers(), &valid);
    debug!(
        input_rows = rows.len(),
        valid_rows = valid.len(),
        "validity filter applied"
    );
    PreparedBatch {
        rows: valid,
        visible,
    }
}

/// The single table of every valid row, value hygiene on.
pub fn unified_view(batch: &PreparedBatch, dictionary: &Dictionary, locale: Locale) -> TableView {
    let options = ProjectionOptions {
        blank_unknown_values: true,
    };
    TableView {
        title: translate_value(dictionary, locale, UNIFIED_TITLE).to_string(),
        headers: display_headers(dictionary, locale, &batch.visible),
        rows: project_all(&batch.rows, &batch.visible, dictionary, locale, options),
        filename: export_filename(ExportView::Unified, locale),
    }
}

/// The unified table with the derived `RDQuota` identifier column first.
pub fn unified_by_id_view(
    batch: &PreparedBatch,
    dictionary: &Dictionary,
    locale: Locale,
) -> TableView {
    let rows: Vec<Row> = batch.rows.iter().map(with_identifier_column).collect();
    let visible = unified_headers(&batch.visible);
    let options = ProjectionOptions {
        blank_unknown_values: true,
    };
    TableView {
        title: translate_value(dictionary, locale, UNIFIED_BY_ID_TITLE).to_string(),
        headers: display_headers(dictionary, locale, &visible),
        rows: project_all(&rows, &visible, dictionary, locale, options),
        filename: export_filename(ExportView::UnifiedById, locale),
    }
}

/// One table per presentable category, in display order.
///
/// Titles and filename subjects keep the raw category label in both locales;
/// headers and values inside the table still translate. Category tables keep
/// "Unknown" cell values visible, unlike the unified views.
pub fn category_views(
    batch: &PreparedBatch,
    dictionary: &Dictionary,
    locale: Locale,
    with_identifier: bool,
) -> Vec<TableView> {
    let categories = categorize(&batch.rows);
    let options = ProjectionOptions::default();
    presentable_categories(&categories)
        .map(|(label, rows)| {
            let (rows, visible) = if with_identifier {
                (
                    rows.iter().map(with_identifier_column).collect(),
                    unified_headers(&batch.visible),
                )
            } else {
                (rows.to_vec(), batch.visible.clone())
            };
            TableView {
                title: label.to_string(),
                headers: display_headers(dictionary, locale, &visible),
                rows: project_all(&rows, &visible, dictionary, locale, options),
                filename: export_filename(ExportView::Category(label), locale),
            }
        })
        .collect()
}

/// Presentable category labels with their row counts, in display order.
pub fn category_counts(batch: &PreparedBatch) -> Vec<(String, usize)> {
    let categories = categorize(&batch.rows);
    presentable_categories(&categories)
        .map(|(label, rows)| (label.to_string(), rows.len()))
        .collect()
}

/// Counts for the stat block: valid rows, presentable categories, and the
/// column count of the view surface the command rendered.
pub fn summary_counts(batch: &PreparedBatch, with_identifier: bool) -> SummaryCounts {
    let categories = categorize(&batch.rows);
    SummaryCounts {
        rows: batch.rows.len(),
        categories: category_count(&categories),
        columns: batch.visible.len() + usize::from(with_identifier),
    }
}
