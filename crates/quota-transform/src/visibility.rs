use quota_model::Row;

/// Returns the headers to display for a row set.
///
/// Current policy is identity. Column suppression by occupancy was retired
/// in favor of per-cell masking, which keeps the grid shape stable across
/// categories; the seam stays so a future policy can swap in without
/// touching callers. Must remain a pure function of its inputs.
pub fn resolve_visible(headers: &[String], _rows: &[Row]) -> Vec<String> {
    headers.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    use quota_model::final_headers;

    #[test]
    fn identity_even_for_fully_empty_columns() {
        let headers = final_headers();
        let rows = vec![Row::new("1"), Row::new("2")];
        assert_eq!(resolve_visible(&headers, &rows), headers);
    }

    #[test]
    fn identity_for_empty_row_set() {
        let headers = vec!["Zone".to_string()];
        assert_eq!(resolve_visible(&headers, &[]), headers);
    }
}
