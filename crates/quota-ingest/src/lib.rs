//! Request row ingestion.
//!
//! The transformation pipeline receives rows that an upstream layer has
//! already parsed out of the source spreadsheet. This crate is the file
//! boundary for that hand-off: it reads CSV or JSON row dumps, normalizes
//! raw text, and produces [`quota_model::Row`] values keyed by header.

pub mod rows;

pub use rows::{load_rows, read_rows_csv, read_rows_json};
