//! SVG card templates. Pure formatting, no I/O.

pub mod htb;
pub mod thm;

pub use htb::{render_htb, HtbImages};
pub use thm::{render_thm, ThmImages};

use crate::types::FieldValue;

pub const FALLBACK: &str = "N/A";

/// Escape text for use inside SVG element content or attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Display text for an optional field, escaped, with `fallback` when absent.
pub fn display(value: Option<&FieldValue>, fallback: &str) -> String {
    match value {
        Some(v) => escape_xml(&v.to_string()),
        None => fallback.to_string(),
    }
}

pub fn display_str(value: Option<&str>, fallback: &str) -> String {
    value.map(escape_xml).unwrap_or_else(|| fallback.to_string())
}
