//! Export formatters for projected quota tables.
//!
//! Renders one (headers, display rows) table into the three export
//! surfaces: a Word-friendly clipboard HTML fragment, a TSV plain-text
//! payload, and an XLSX workbook. Filenames follow the locale-suffixed
//! patterns the export contract fixes.

pub mod error;
pub mod filename;
pub mod html;
pub mod tsv;
pub mod xlsx;

pub use error::ExportError;
pub use filename::{ExportView, export_filename, sanitize_subject};
pub use html::{clipboard_html, escape_html};
pub use tsv::clipboard_text;
pub use xlsx::write_workbook;
