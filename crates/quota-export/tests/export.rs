use quota_model::{Dictionary, Locale, Row, final_headers};
use quota_transform::{DisplayRow, ProjectionOptions, display_headers, project_all};

use quota_export::{clipboard_html, clipboard_text, write_workbook};

fn display_table(locale: Locale) -> (Vec<String>, Vec<DisplayRow>) {
    let dictionary = Dictionary::embedded().expect("embedded dictionary");
    let rows = vec![
        Row::new("1")
            .with("Request Type", "Zonal Enablement")
            .with("Subscription ID", "sub-001")
            .with("Cores", "8")
            .with("Zone", "1"),
        Row::new("2")
            .with("Request Type", "Quota Increase")
            .with("Subscription ID", "A & B <script>")
            .with("Cores", "16"),
    ];
    let visible = final_headers();
    let headers = display_headers(&dictionary, locale, &visible);
    let display = project_all(
        &rows,
        &visible,
        &dictionary,
        locale,
        ProjectionOptions::default(),
    );
    (headers, display)
}

#[test]
fn html_escapes_hostile_cell_content() {
    let (headers, rows) = display_table(Locale::EnUs);
    let html = clipboard_html(&headers, &rows, None);
    assert!(html.contains("A &amp; B &lt;script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn html_fragment_is_word_shaped() {
    let (headers, rows) = display_table(Locale::PtBr);
    let html = clipboard_html(&headers, &rows, Some("Tabela Unificada"));
    assert!(html.starts_with("<html>"));
    assert!(html.contains("<!--StartFragment-->"));
    assert!(html.contains("<!--EndFragment-->"));
    assert!(html.contains("<h2>Tabela Unificada</h2>"));
    assert_eq!(html.matches("<th scope=\"col\">").count(), headers.len());
    assert_eq!(html.matches("<tr>").count(), rows.len() + 1);
    assert!(html.contains("Tipo de Requisição"));
    assert!(html.contains("Habilitação Zonal"));
}

#[test]
fn html_title_is_escaped() {
    let (headers, rows) = display_table(Locale::EnUs);
    let html = clipboard_html(&headers, &rows, Some("Results <2024>"));
    assert!(html.contains("<h2>Results &lt;2024&gt;</h2>"));
}

#[test]
fn tsv_carries_the_same_table_unescaped() {
    let (headers, rows) = display_table(Locale::EnUs);
    let text = clipboard_text(&headers, &rows);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), rows.len() + 1);
    for line in &lines {
        assert_eq!(line.split('\t').count(), headers.len());
    }
    // Zonal row: cores masked to the sentinel.
    assert!(lines[1].contains("N/A"));
    // Plain text is never entity-escaped.
    assert!(text.contains("A & B <script>"));
}

#[test]
fn workbook_lands_on_disk() {
    let (headers, rows) = display_table(Locale::EnUs);
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("Unified_Table_en-US.xlsx");
    write_workbook(&path, "Unified Table", &headers, &rows).expect("write workbook");
    let metadata = std::fs::metadata(&path).expect("workbook metadata");
    assert!(metadata.len() > 0);
}

#[test]
fn empty_table_still_produces_a_workbook_with_headers() {
    let dictionary = Dictionary::embedded().expect("embedded dictionary");
    let headers = display_headers(&dictionary, Locale::EnUs, &final_headers());
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("empty.xlsx");
    write_workbook(&path, "Empty", &headers, &[]).expect("write workbook");
    assert!(path.exists());
}
