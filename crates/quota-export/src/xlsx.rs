use std::path::Path;

use rust_xlsxwriter::{ColNum, Format, FormatAlign, FormatBorder, RowNum, Workbook};
use tracing::debug;

use quota_transform::DisplayRow;

use crate::error::{ExportError, Result};

const SHEET_NAME_MAX: usize = 31;
const SHEET_ILLEGAL: [char; 7] = ['*', ':', '?', '/', '\\', '[', ']'];

/// Replaces characters Excel rejects in sheet names and trims to the limit.
fn sanitize_sheet_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|ch| if SHEET_ILLEGAL.contains(&ch) { '_' } else { ch })
        .collect();
    let trimmed = replaced.trim();
    if trimmed.is_empty() {
        return "Sheet".to_string();
    }
    trimmed.chars().take(SHEET_NAME_MAX).collect()
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color("#D3D3D3")
        .set_font_color("#000000")
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
}

fn body_format() -> Format {
    Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
}

fn row_num(index: usize) -> Result<RowNum> {
    RowNum::try_from(index).map_err(|_| ExportError::TableTooLarge)
}

fn col_num(index: usize) -> Result<ColNum> {
    ColNum::try_from(index).map_err(|_| ExportError::TableTooLarge)
}

/// Writes one projected table as a single-worksheet XLSX workbook.
///
/// Grey bold header row, bordered centered body cells, frozen header,
/// autofit column widths. The sheet name is sanitized for Excel's rules.
pub fn write_workbook(
    path: &Path,
    sheet_name: &str,
    headers: &[String],
    rows: &[DisplayRow],
) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sanitize_sheet_name(sheet_name))?;

    let header_format = header_format();
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col_num(col)?, header, &header_format)?;
    }

    let body_format = body_format();
    for (index, row) in rows.iter().enumerate() {
        let row_index = row_num(index + 1)?;
        for (col, header) in headers.iter().enumerate() {
            worksheet.write_string_with_format(
                row_index,
                col_num(col)?,
                row.get(header).unwrap_or(""),
                &body_format,
            )?;
        }
    }

    worksheet.set_freeze_panes(1, 0)?;
    worksheet.autofit();
    workbook.save(path)?;
    debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = headers.len(),
        "wrote workbook"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_names_are_sanitized_for_excel() {
        assert_eq!(sanitize_sheet_name("Quota Increase"), "Quota Increase");
        assert_eq!(
            sanitize_sheet_name("Region: East/West"),
            "Region_ East_West"
        );
        assert_eq!(sanitize_sheet_name("   "), "Sheet");
        assert_eq!(
            sanitize_sheet_name("A very long category name that keeps going").len(),
            SHEET_NAME_MAX
        );
    }
}
