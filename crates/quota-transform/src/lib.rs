//! Row transformation pipeline for quota request tables.
//!
//! Pure, synchronous steps composed by the projection:
//!
//! - **validity**: which rows qualify for any view
//! - **visibility**: which headers are displayed (identity seam)
//! - **masking**: zonal Cores/Zone masking with the `N/A` sentinel
//! - **normalize**: missing and blank cells render as empty strings
//! - **translate**: soft dictionary lookups for headers and values
//! - **categorize**: request-type buckets, Unknown excluded from display
//! - **project**: the composed display-row builder
//!
//! Every step takes its inputs explicitly (locale included) and produces new
//! data; nothing here holds state or touches the outside world.

pub mod categorize;
pub mod masking;
pub mod normalize;
pub mod project;
pub mod translate;
pub mod validity;
pub mod visibility;

pub use categorize::{categorize, category_count, is_presentable, presentable_categories};
pub use masking::{is_zonal, mask};
pub use normalize::normalize;
pub use project::{
    DisplayRow, ProjectionOptions, display_headers, project, project_all, unified_headers,
    with_identifier_column,
};
pub use translate::{translate_header, translate_value};
pub use validity::{filter_valid, is_valid};
pub use visibility::resolve_visible;
