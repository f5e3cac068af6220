use quota_transform::DisplayRow;

// Paste fidelity into Word and friends depends on this exact styling; the
// fragment markers are what Windows clipboard consumers slice on.
const FRAGMENT_STYLE: &str = concat!(
    "table { border-collapse: collapse; width: auto; table-layout: auto; ",
    "border: 1px solid #000000; font-family: Calibri, Arial, sans-serif; ",
    "background-color: #ffffff; }\n",
    "th { background-color: #D3D3D3; color: #000000; font-weight: bold; ",
    "border: 1px solid #000000; padding: 6px 10px; text-transform: uppercase; ",
    "font-size: 10pt; text-align: center; }\n",
    "td { border: 1px solid #000000; padding: 6px 10px; color: #000000; ",
    "font-size: 10pt; text-align: center; }\n",
    "h2 { font-family: Calibri, Arial, sans-serif; font-size: 14pt; ",
    "color: #000000; margin-bottom: 10px; }\n",
);

/// Escapes the five HTML-significant characters in one pass.
///
/// Cell data travels into a rich-text document verbatim; an unescaped `<`
/// or `&` would corrupt the fragment or inject markup into the paste.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Renders a projected table as a self-contained clipboard HTML fragment.
///
/// Headers, cells, and the optional title are entity-escaped. Cells are
/// looked up by display key; a key absent from a row renders empty, though
/// the projection guarantees that never happens within one table.
pub fn clipboard_html(headers: &[String], rows: &[DisplayRow], title: Option<&str>) -> String {
    let mut html = String::new();
    html.push_str("<html>\n<head>\n");
    html.push_str("<meta http-equiv=\"content-type\" content=\"text/html; charset=utf-8\">\n");
    html.push_str("<style>\n");
    html.push_str(FRAGMENT_STYLE);
    html.push_str("</style>\n</head>\n<body>\n<!--StartFragment-->\n");
    if let Some(title) = title {
        html.push_str("<h2>");
        html.push_str(&escape_html(title));
        html.push_str("</h2>\n");
    }
    html.push_str("<table>\n<thead>\n<tr>");
    for header in headers {
        html.push_str("<th scope=\"col\">");
        html.push_str(&escape_html(header));
        html.push_str("</th>");
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in rows {
        html.push_str("<tr>");
        for header in headers {
            html.push_str("<td>");
            html.push_str(&escape_html(row.get(header).unwrap_or("")));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n<!--EndFragment-->\n</body>\n</html>\n");
    html
}
