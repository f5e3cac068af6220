/// The two representations one copy action carries.
///
/// Both tiers receive the same pair; which representation a paste target
/// picks is up to that target. The HTML half is the Word-friendly fragment,
/// the text half is the TSV rendering of the same table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardPayload {
    pub html: String,
    pub text: String,
}

impl ClipboardPayload {
    pub fn new(html: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            text: text.into(),
        }
    }
}
