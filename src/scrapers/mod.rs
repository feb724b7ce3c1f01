//! Per-site fetch and extraction.
//!
//! Both scrapers are best-effort: a missing document or an unexpected shape
//! yields absent fields, never an error.

pub mod htb;
pub mod thm;

use scraper::{ElementRef, Html, Selector};

/// Text of an element with each fragment trimmed and the pieces joined.
/// Empty text counts as absent.
pub(crate) fn stripped_text(element: &ElementRef) -> Option<String> {
    let text: String = element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// All elements matching `selector`, in document order.
pub(crate) fn select_all<'a>(document: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(selector) {
        Ok(sel) => document.select(&sel).collect(),
        Err(_) => vec![],
    }
}
