use std::fs;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use quota_clipboard::{ClipboardPayload, copy_payload};
use quota_export::{clipboard_html, clipboard_text, write_workbook};
use quota_ingest::load_rows;
use quota_model::{Dictionary, Locale};
use quota_transform::translate_value;

use crate::cli::{CategoriesArgs, CopyArgs, ExportArgs, LangArg, ShowArgs, TableArgs};
use crate::pipeline::{
    PreparedBatch, TableView, category_counts, category_views, load_dictionary, prepare,
    summary_counts, unified_by_id_view, unified_view,
};
use crate::summary::{print_categories, print_stats, print_view};
use crate::types::{CopyResult, ExportResult};

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let span = info_span!("show", rows_file = %args.table.rows.display());
    let _guard = span.enter();
    let (batch, dictionary, locale) = load_batch(&args.table)?;
    let views = if args.per_category {
        let heading = if args.by_id {
            "RDQuotas Categorized"
        } else {
            "Categorized Results"
        };
        println!("{}\n", translate_value(&dictionary, locale, heading));
        category_views(&batch, &dictionary, locale, args.by_id)
    } else if args.by_id {
        vec![unified_by_id_view(&batch, &dictionary, locale)]
    } else {
        vec![unified_view(&batch, &dictionary, locale)]
    };
    for view in &views {
        print_view(view);
    }
    let counts = summary_counts(&batch, args.by_id);
    print_stats(&counts, &dictionary, locale);
    Ok(())
}

pub fn run_copy(args: &CopyArgs) -> Result<CopyResult> {
    let span = info_span!("copy", rows_file = %args.table.rows.display());
    let _guard = span.enter();
    let (batch, dictionary, locale) = load_batch(&args.table)?;
    let view = select_view(
        &batch,
        &dictionary,
        locale,
        args.category.as_deref(),
        args.by_id,
    )?;
    let title = args.title.clone().unwrap_or_else(|| view.title.clone());
    let payload = ClipboardPayload::new(
        clipboard_html(&view.headers, &view.rows, Some(title.as_str())),
        clipboard_text(&view.headers, &view.rows),
    );
    let outcome = copy_payload(&payload);
    info!(view = %view.title, rows = view.rows.len(), copied = outcome.is_copied(), "copy finished");
    Ok(CopyResult {
        title,
        rows: view.rows.len(),
        outcome,
    })
}

pub fn run_export(args: &ExportArgs) -> Result<ExportResult> {
    let span = info_span!("export", rows_file = %args.table.rows.display());
    let _guard = span.enter();
    let (batch, dictionary, locale) = load_batch(&args.table)?;
    let views = if args.per_category {
        category_views(&batch, &dictionary, locale, args.by_id)
    } else if args.by_id {
        vec![unified_by_id_view(&batch, &dictionary, locale)]
    } else {
        vec![unified_view(&batch, &dictionary, locale)]
    };
    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("create {}", args.output_dir.display()))?;

    let mut written = Vec::new();
    let mut errors = Vec::new();
    for view in &views {
        let path = args.output_dir.join(&view.filename);
        match write_workbook(&path, &view.title, &view.headers, &view.rows) {
            Ok(()) => written.push(path),
            Err(error) => errors.push(format!("{}: {error}", path.display())),
        }
    }
    info!(
        workbooks = written.len(),
        failures = errors.len(),
        "export finished"
    );
    let counts = summary_counts(&batch, args.by_id);
    print_stats(&counts, &dictionary, locale);
    Ok(ExportResult { written, errors })
}

pub fn run_categories(args: &CategoriesArgs) -> Result<()> {
    let rows = load_rows(&args.rows)
        .with_context(|| format!("read rows from {}", args.rows.display()))?;
    let batch = prepare(&rows);
    print_categories(&category_counts(&batch));
    Ok(())
}

fn load_batch(table: &TableArgs) -> Result<(PreparedBatch, Dictionary, Locale)> {
    let dictionary = load_dictionary(table.dictionary.as_deref())?;
    let rows = load_rows(&table.rows)
        .with_context(|| format!("read rows from {}", table.rows.display()))?;
    let batch = prepare(&rows);
    info!(
        input_rows = rows.len(),
        valid_rows = batch.rows.len(),
        "rows prepared"
    );
    Ok((batch, dictionary, locale_from(table.lang)))
}

/// The view a copy action targets: one category's table, or a unified view.
fn select_view(
    batch: &PreparedBatch,
    dictionary: &Dictionary,
    locale: Locale,
    category: Option<&str>,
    by_id: bool,
) -> Result<TableView> {
    match category {
        Some(label) => {
            let mut views = category_views(batch, dictionary, locale, by_id);
            let position = views
                .iter()
                .position(|view| view.title == label)
                .ok_or_else(|| {
                    let available: Vec<String> = category_counts(batch)
                        .into_iter()
                        .map(|(name, _)| name)
                        .collect();
                    anyhow!(
                        "no category named {label:?}; available: {}",
                        available.join(", ")
                    )
                })?;
            Ok(views.swap_remove(position))
        }
        None if by_id => Ok(unified_by_id_view(batch, dictionary, locale)),
        None => Ok(unified_view(batch, dictionary, locale)),
    }
}

fn locale_from(lang: LangArg) -> Locale {
    match lang {
        LangArg::EnUs => Locale::EnUs,
        LangArg::PtBr => Locale::PtBr,
    }
}
