use quota_transform::DisplayRow;

/// Renders a projected table as tab-separated plain text, header row first.
///
/// Values arrive normalized from the projection and are not escaped; this
/// payload targets spreadsheet paste, not markup consumers.
pub fn clipboard_text(headers: &[String], rows: &[DisplayRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join("\t"));
    for row in rows {
        let cells: Vec<&str> = headers
            .iter()
            .map(|header| row.get(header).unwrap_or(""))
            .collect();
        lines.push(cells.join("\t"));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    use quota_model::{Dictionary, Locale, Row};
    use quota_transform::{ProjectionOptions, display_headers, project};

    #[test]
    fn header_row_first_then_one_line_per_row() {
        let dictionary = Dictionary::embedded().expect("embedded dictionary");
        let visible = vec!["Request Type".to_string(), "Cores".to_string()];
        let rows = vec![
            project(
                &Row::new("1")
                    .with("Request Type", "Quota Increase")
                    .with("Cores", "8"),
                &visible,
                &dictionary,
                Locale::EnUs,
                ProjectionOptions::default(),
            ),
            project(
                &Row::new("2").with("Request Type", "Quota Increase"),
                &visible,
                &dictionary,
                Locale::EnUs,
                ProjectionOptions::default(),
            ),
        ];
        let headers = display_headers(&dictionary, Locale::EnUs, &visible);
        let text = clipboard_text(&headers, &rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Original ID\tRequest Type\tCores",
                "1\tQuota Increase\t8",
                "2\tQuota Increase\t",
            ]
        );
    }
}
