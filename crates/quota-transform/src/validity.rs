use quota_model::{
    NOT_APPLICABLE, REGION, REQUEST_TYPE, Row, SUBSCRIPTION_ID, UNKNOWN_EN, UNKNOWN_PT, VM_TYPE,
};

/// Whether a row qualifies for any displayed or exported view.
///
/// Unknown request types never qualify, in either language. Everything else
/// qualifies through one of two legitimate request shapes: subscription
/// scoped (non-empty `Subscription ID`) or region/VM scoped (`VM Type` and
/// `Region` both present and not `N/A`).
pub fn is_valid(row: &Row) -> bool {
    let request_type = row.trimmed(REQUEST_TYPE);
    if request_type == UNKNOWN_EN || request_type == UNKNOWN_PT {
        return false;
    }
    if !row.trimmed(SUBSCRIPTION_ID).is_empty() {
        return true;
    }
    let vm_type = row.trimmed(VM_TYPE);
    let region = row.trimmed(REGION);
    !vm_type.is_empty()
        && vm_type != NOT_APPLICABLE
        && !region.is_empty()
        && region != NOT_APPLICABLE
}

/// Filters a row set down to the rows worth presenting.
pub fn filter_valid(rows: &[Row]) -> Vec<Row> {
    rows.iter().filter(|row| is_valid(row)).cloned().collect()
}
