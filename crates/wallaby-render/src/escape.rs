//! Escaping for rendered output.
//!
//! The model holds raw, unescaped values; escaping happens only here, on the
//! way out. Because the parser never decodes entities, text that arrived as
//! `&amp;` renders as `&amp;amp;`. That asymmetry is the documented
//! no-entity-decoding contract, not a bug.

/// Escape text-node content. Exactly three characters are escaped, ampersand
/// first so the entities it introduces are never re-escaped.
#[must_use]
pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value for emission between double quotes. Five
/// characters are escaped; single quotes too, since source quoting is
/// normalized to double quotes on output.
#[must_use]
pub fn escape_attribute(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
