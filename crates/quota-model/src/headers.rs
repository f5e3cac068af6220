//! Canonical header names and sentinel values.
//!
//! The header list order is the export column order; it never changes per
//! category. Masked cells keep their column and carry [`NOT_APPLICABLE`]
//! instead, so the grid shape stays stable across rows.

/// Identifier column, always pinned first in any display row.
pub const ORIGINAL_ID: &str = "Original ID";

/// Derived identifier column used by the unified-by-id view.
pub const RDQUOTA: &str = "RDQuota";

pub const SUBSCRIPTION_ID: &str = "Subscription ID";
pub const REQUEST_TYPE: &str = "Request Type";
pub const VM_TYPE: &str = "VM Type";
pub const REGION: &str = "Region";
pub const ZONE: &str = "Zone";
pub const CORES: &str = "Cores";
pub const STATUS: &str = "Status";

/// Canonical display/export column order (identifier excluded).
pub const FINAL_HEADERS: [&str; 7] = [
    SUBSCRIPTION_ID,
    REQUEST_TYPE,
    VM_TYPE,
    REGION,
    ZONE,
    CORES,
    STATUS,
];

/// Placeholder substituted for masked cells.
pub const NOT_APPLICABLE: &str = "N/A";

/// Request-type sentinel that disqualifies a row, per language.
pub const UNKNOWN_EN: &str = "Unknown";
pub const UNKNOWN_PT: &str = "Desconhecido";

/// Request types whose rows are zone-scoped (cores are meaningless).
pub const ZONAL_ENABLEMENT_EN: &str = "Zonal Enablement";
pub const ZONAL_ENABLEMENT_PT: &str = "Habilitação Zonal";

/// The canonical header list as owned strings, in export order.
pub fn final_headers() -> Vec<String> {
    FINAL_HEADERS.iter().map(ToString::to_string).collect()
}
