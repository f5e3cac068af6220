use quota_model::{Dictionary, Locale};

/// Translates a header name for the locale. Soft lookup: uncovered headers
/// pass through unchanged, and the source locale is always a no-op.
pub fn translate_header<'a>(dictionary: &'a Dictionary, locale: Locale, header: &'a str) -> &'a str {
    if locale.is_translated() {
        dictionary.translate(header)
    } else {
        header
    }
}

/// Translates an enumerable cell value for the locale. Same soft-lookup
/// contract as [`translate_header`]; free-form values are never covered by
/// the dictionary and therefore never change.
pub fn translate_value<'a>(dictionary: &'a Dictionary, locale: Locale, value: &'a str) -> &'a str {
    if locale.is_translated() {
        dictionary.translate(value)
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_locale_never_translates() {
        let dictionary = Dictionary::embedded().expect("embedded dictionary");
        assert_eq!(
            translate_header(&dictionary, Locale::EnUs, "Request Type"),
            "Request Type"
        );
        assert_eq!(
            translate_value(&dictionary, Locale::EnUs, "Approved"),
            "Approved"
        );
    }

    #[test]
    fn covered_strings_translate_for_pt_br() {
        let dictionary = Dictionary::embedded().expect("embedded dictionary");
        assert_eq!(
            translate_header(&dictionary, Locale::PtBr, "Request Type"),
            "Tipo de Requisição"
        );
        assert_eq!(
            translate_value(&dictionary, Locale::PtBr, "Zonal Enablement"),
            "Habilitação Zonal"
        );
    }

    #[test]
    fn uncovered_strings_pass_through() {
        let dictionary = Dictionary::embedded().expect("embedded dictionary");
        assert_eq!(
            translate_value(&dictionary, Locale::PtBr, "sub-001"),
            "sub-001"
        );
    }
}
