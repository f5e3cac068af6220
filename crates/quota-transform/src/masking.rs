use quota_model::{
    CORES, CellValue, NOT_APPLICABLE, REQUEST_TYPE, Row, ZONAL_ENABLEMENT_EN, ZONAL_ENABLEMENT_PT,
    ZONE,
};

/// Whether the row is a zone-scoped enablement request, in either language.
pub fn is_zonal(row: &Row) -> bool {
    let request_type = row.trimmed(REQUEST_TYPE);
    request_type == ZONAL_ENABLEMENT_EN || request_type == ZONAL_ENABLEMENT_PT
}

/// Applies the zonal masking rule to one cell.
///
/// Core counts are meaningless for zonal requests and zones are meaningless
/// for everything else. The affected cell carries the `N/A` sentinel instead
/// of being dropped, keeping the column count stable across rows. The zonal
/// flag is row-local, never derived from the row set.
pub fn mask(row: &Row, header: &str, value: CellValue) -> CellValue {
    let zonal = is_zonal(row);
    if (header == CORES && zonal) || (header == ZONE && !zonal) {
        CellValue::text(NOT_APPLICABLE)
    } else {
        value
    }
}
