//! HTML pages: the search page (logo, form, results) and the 404 page.

use crate::index::SearchResult;
use std::fmt::Write;

const LOGO_AND_FORM: &str = "<html><head><title>searchd</title></head>\n\
<body>\n\
<center style=\"font-size:500%;\">\n\
<span style=\"color:blue;\">s</span><span style=\"color:red;\">e</span>\
<span style=\"color:gold;\">a</span><span style=\"color:blue;\">r</span>\
<span style=\"color:green;\">c</span><span style=\"color:red;\">h</span>\n\
</center>\n\
<p>\n\
<div style=\"height:20px;\"></div>\n\
<center>\n\
<form action=\"/query\" method=\"get\">\n\
<input type=\"text\" size=30 name=\"terms\" />\n\
<input type=\"submit\" value=\"Search\" />\n\
</form>\n\
</center><p>\n";

/// Outcome of one query, as shown on the results page.
#[derive(Debug, Clone)]
pub struct QueryPage {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub index_empty: bool,
    /// Prefix under which local documents are linked (e.g. "/static/").
    pub static_prefix: String,
}

pub fn search_page(query: Option<&QueryPage>) -> String {
    let mut page = String::from(LOGO_AND_FORM);

    if let Some(query) = query {
        render_results(&mut page, query);
    }

    page.push_str("</body>\r\n</html>\r\n");
    page
}

fn render_results(page: &mut String, query: &QueryPage) {
    let escaped_query = escape_html(&query.query);

    if query.index_empty {
        let _ = write!(
            page,
            "<p><br>\r\nNo results found for <b>{escaped_query}</b>\r\n<p>\r\n\r\n"
        );
        return;
    }

    let count = query.results.len();
    let plural = if count > 1 { "s" } else { "" };
    let _ = write!(
        page,
        "<p><br>\r\n{count} result{plural} found for <b>{escaped_query}</b>\r\n<p>\r\n\r\n"
    );

    page.push_str("<ul>\r\n");
    for hit in &query.results {
        let href = if hit.doc.starts_with("http://") {
            hit.doc.clone()
        } else {
            format!("{}{}", query.static_prefix, hit.doc)
        };
        let _ = write!(
            page,
            "<li> <a href=\"{}\">{}</a> [{}]<br>\r\n",
            escape_html(&href),
            escape_html(&hit.doc),
            hit.rank
        );
    }
    page.push_str("</ul>\r\n");
}

pub fn not_found_page(name: &str) -> String {
    format!(
        "<html><body>Couldn't find file \"{}\"</body></html>\n",
        escape_html(name)
    )
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
