//! Data model for quota request tables.
//!
//! Defines the row and cell types shared by the transform and export
//! crates, the canonical header list, the bilingual dictionary, and the
//! display locale. Rows are immutable once built; every downstream step
//! produces new data rather than mutating in place.

pub mod dictionary;
pub mod error;
pub mod headers;
pub mod locale;
pub mod row;

pub use dictionary::Dictionary;
pub use error::{ModelError, Result};
pub use headers::{
    CORES, FINAL_HEADERS, NOT_APPLICABLE, ORIGINAL_ID, RDQUOTA, REGION, REQUEST_TYPE, STATUS,
    SUBSCRIPTION_ID, UNKNOWN_EN, UNKNOWN_PT, VM_TYPE, ZONAL_ENABLEMENT_EN, ZONAL_ENABLEMENT_PT,
    ZONE, final_headers,
};
pub use locale::Locale;
pub use row::{CellValue, Row};
