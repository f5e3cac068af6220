use std::collections::BTreeMap;

use tracing::debug;

use quota_model::{REQUEST_TYPE, Row, UNKNOWN_EN, UNKNOWN_PT};

/// Groups rows into named buckets by trimmed request type.
///
/// Rows with no request type land in the "Unknown" bucket so they stay
/// accounted for, but that bucket is excluded from presentation. `BTreeMap`
/// keys give the lexicographic category order the display contract wants.
pub fn categorize(rows: &[Row]) -> BTreeMap<String, Vec<Row>> {
    let mut categories: BTreeMap<String, Vec<Row>> = BTreeMap::new();
    for row in rows {
        let label = row.trimmed(REQUEST_TYPE);
        let label = if label.is_empty() { UNKNOWN_EN } else { label };
        categories
            .entry(label.to_string())
            .or_default()
            .push(row.clone());
    }
    debug!(categories = categories.len(), rows = rows.len(), "categorized rows");
    categories
}

/// Whether a category bucket may be rendered or exported.
pub fn is_presentable(category: &str) -> bool {
    category != UNKNOWN_EN && category != UNKNOWN_PT
}

/// Presentable categories in display order.
pub fn presentable_categories(
    categories: &BTreeMap<String, Vec<Row>>,
) -> impl Iterator<Item = (&str, &[Row])> {
    categories
        .iter()
        .filter(|(name, _)| is_presentable(name))
        .map(|(name, rows)| (name.as_str(), rows.as_slice()))
}

/// Count of categories shown to the user.
pub fn category_count(categories: &BTreeMap<String, Vec<Row>>) -> usize {
    presentable_categories(categories).count()
}
