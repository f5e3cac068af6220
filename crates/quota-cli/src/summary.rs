use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use quota_clipboard::{CopyOutcome, Tier};
use quota_model::{Dictionary, Locale};
use quota_transform::translate_value;

use crate::pipeline::{SummaryCounts, TableView};
use crate::types::{CopyResult, ExportResult};

pub fn print_view(view: &TableView) {
    println!("{}", view.title);
    let mut table = Table::new();
    table.set_header(
        view.headers
            .iter()
            .map(|header| header_cell(header))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for index in 0..view.headers.len() {
        align_column(&mut table, index, CellAlignment::Center);
    }
    for row in &view.rows {
        table.add_row(row.values().collect::<Vec<_>>());
    }
    println!("{table}");
    println!();
}

/// The stat block: valid rows, presentable categories, visible columns.
pub fn print_stats(counts: &SummaryCounts, dictionary: &Dictionary, locale: Locale) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(translate_value(dictionary, locale, "Total Rows")),
        header_cell(translate_value(dictionary, locale, "Categories")),
        header_cell(translate_value(dictionary, locale, "Columns")),
    ]);
    apply_table_style(&mut table);
    for index in 0..3 {
        align_column(&mut table, index, CellAlignment::Center);
    }
    table.add_row(vec![
        stat_cell(counts.rows, Color::Blue),
        stat_cell(counts.categories, Color::Magenta),
        stat_cell(counts.columns, Color::Green),
    ]);
    println!("{table}");
}

pub fn print_copy(result: &CopyResult) {
    match result.outcome {
        CopyOutcome::Copied(Tier::Structured) => println!(
            "Copied \"{}\" ({} rows) to the clipboard as HTML and plain text.",
            result.title, result.rows
        ),
        CopyOutcome::Copied(Tier::Command) => println!(
            "Copied \"{}\" ({} rows) to the clipboard as plain text via the system copy utility.",
            result.title, result.rows
        ),
        CopyOutcome::Unavailable => {
            eprintln!("Clipboard unavailable; nothing was copied.");
        }
    }
}

pub fn print_export(result: &ExportResult) {
    for path in &result.written {
        println!("Wrote {}", path.display());
    }
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

pub fn print_categories(counts: &[(String, usize)]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, rows) in counts {
        table.add_row(vec![Cell::new(label), Cell::new(*rows)]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn stat_cell(value: usize, color: Color) -> Cell {
    Cell::new(value).fg(color).add_attribute(Attribute::Bold)
}
