use startpage_core::Escaping;
use std::borrow::Cow;

/// HTML-escape a string for use in text and quoted attributes
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Apply the build's escaping mode to a piece of configuration text.
pub fn apply(escaping: Escaping, s: &str) -> Cow<'_, str> {
    match escaping {
        Escaping::Html => Cow::Owned(html_escape(s)),
        Escaping::Trusted => Cow::Borrowed(s),
    }
}
