use proptest::option;
use proptest::prelude::*;

use quota_model::{
    CORES, CellValue, Dictionary, FINAL_HEADERS, Locale, NOT_APPLICABLE, REQUEST_TYPE, Row, ZONE,
    final_headers,
};
use quota_transform::{
    ProjectionOptions, display_headers, is_valid, normalize, project, resolve_visible,
};

fn cell_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just(NOT_APPLICABLE.to_string()),
        Just("Unknown".to_string()),
        "[ -~]{0,12}",
    ]
}

fn request_type_label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Zonal Enablement".to_string()),
        Just("Quota Increase".to_string()),
        Just("Region Enablement".to_string()),
        Just("Unknown".to_string()),
        Just(String::new()),
        "[ -~]{0,16}",
    ]
}

fn arbitrary_row() -> impl Strategy<Value = Row> {
    (
        "[0-9]{1,4}",
        request_type_label(),
        proptest::collection::vec(option::of(cell_text()), FINAL_HEADERS.len()),
    )
        .prop_map(|(id, request_type, values)| {
            let mut row = Row::new(id).with(REQUEST_TYPE, request_type);
            for (header, value) in FINAL_HEADERS.iter().zip(values) {
                if *header == REQUEST_TYPE {
                    continue;
                }
                if let Some(text) = value {
                    row = row.with(*header, text);
                }
            }
            row
        })
}

proptest! {
    // Column parity: every display row in one projection carries the same
    // key set, masked and sparse rows included.
    #[test]
    fn projections_share_one_key_set(
        rows in proptest::collection::vec(arbitrary_row(), 1..20),
        translated in any::<bool>(),
    ) {
        let dictionary = Dictionary::embedded().expect("embedded dictionary");
        let locale = if translated { Locale::PtBr } else { Locale::EnUs };
        let headers = resolve_visible(&final_headers(), &rows);
        let expected = display_headers(&dictionary, locale, &headers);
        for row in &rows {
            let projected = project(row, &headers, &dictionary, locale, ProjectionOptions::default());
            let keys: Vec<String> = projected.keys().map(ToString::to_string).collect();
            prop_assert_eq!(keys, expected.clone());
        }
    }

    #[test]
    fn unknown_request_type_never_qualifies(
        row in arbitrary_row(),
        translated_label in any::<bool>(),
        pad in " {0,3}",
    ) {
        let label = if translated_label { "Desconhecido" } else { "Unknown" };
        let row = row.with(REQUEST_TYPE, format!("{pad}{label}{pad}"));
        prop_assert!(!is_valid(&row));
    }

    #[test]
    fn masking_follows_the_zonal_flag(row in arbitrary_row(), zonal in any::<bool>()) {
        let label = if zonal { "Zonal Enablement" } else { "Quota Increase" };
        let row = row.with(REQUEST_TYPE, label);
        let dictionary = Dictionary::embedded().expect("embedded dictionary");
        let projected = project(
            &row,
            &final_headers(),
            &dictionary,
            Locale::EnUs,
            ProjectionOptions::default(),
        );
        if zonal {
            prop_assert_eq!(projected.get(CORES), Some(NOT_APPLICABLE));
        } else {
            prop_assert_eq!(projected.get(ZONE), Some(NOT_APPLICABLE));
        }
    }

    #[test]
    fn normalize_is_total_and_never_invents_placeholders(text in option::of("[ -~]{0,16}")) {
        let cell = match &text {
            Some(value) => CellValue::text(value.clone()),
            None => CellValue::Missing,
        };
        let display = normalize(&cell);
        match text {
            None => prop_assert_eq!(display, ""),
            Some(value) if value.trim().is_empty() => prop_assert_eq!(display, ""),
            Some(value) => prop_assert_eq!(display, value),
        }
    }
}
