use quota_model::Locale;

/// Export views with distinct filename contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportView<'a> {
    /// One category's table; the name becomes the filename subject.
    Category(&'a str),
    /// The single table of all valid rows.
    Unified,
    /// The unified table with the derived `RDQuota` column.
    UnifiedById,
}

/// Collapses whitespace runs in a filename subject to single underscores.
pub fn sanitize_subject(subject: &str) -> String {
    subject.split_whitespace().collect::<Vec<_>>().join("_")
}

/// The workbook filename for a view in a locale.
///
/// The human label varies by language but the structural pattern is fixed:
/// subject, locale tag, `.xlsx`.
pub fn export_filename(view: ExportView<'_>, locale: Locale) -> String {
    match (view, locale) {
        (ExportView::Category(name), Locale::EnUs) => {
            format!("{}_Quota_Data_en-US.xlsx", sanitize_subject(name))
        }
        (ExportView::Category(name), Locale::PtBr) => {
            format!("{}_Dados_Cota_pt-BR.xlsx", sanitize_subject(name))
        }
        (ExportView::Unified, Locale::EnUs) => "Unified_Table_en-US.xlsx".to_string(),
        (ExportView::Unified, Locale::PtBr) => "Tabela_Unificada_pt-BR.xlsx".to_string(),
        (ExportView::UnifiedById, Locale::EnUs) => {
            "Unified_Table_by_RDQuota_en-US.xlsx".to_string()
        }
        (ExportView::UnifiedById, Locale::PtBr) => {
            "Tabela_Unificada_por_RDQuota_pt-BR.xlsx".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    #[test]
    fn category_subjects_collapse_whitespace() {
        assert_snapshot!(
            export_filename(ExportView::Category("Region Enablement & Quota Increase"), Locale::EnUs),
            @"Region_Enablement_&_Quota_Increase_Quota_Data_en-US.xlsx"
        );
        assert_snapshot!(
            export_filename(ExportView::Category("Zonal  Enablement"), Locale::PtBr),
            @"Zonal_Enablement_Dados_Cota_pt-BR.xlsx"
        );
    }

    #[test]
    fn unified_filenames_follow_the_locale() {
        assert_snapshot!(
            export_filename(ExportView::Unified, Locale::EnUs),
            @"Unified_Table_en-US.xlsx"
        );
        assert_snapshot!(
            export_filename(ExportView::Unified, Locale::PtBr),
            @"Tabela_Unificada_pt-BR.xlsx"
        );
    }

    #[test]
    fn by_id_filenames_follow_the_locale() {
        assert_snapshot!(
            export_filename(ExportView::UnifiedById, Locale::EnUs),
            @"Unified_Table_by_RDQuota_en-US.xlsx"
        );
        assert_snapshot!(
            export_filename(ExportView::UnifiedById, Locale::PtBr),
            @"Tabela_Unificada_por_RDQuota_pt-BR.xlsx"
        );
    }
}
