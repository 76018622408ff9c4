// src/core/html.rs
//! Small helpers over `scraper` shared by every module in `specs`.

use scraper::{ElementRef, Selector};

use crate::config::consts::RANGE_SEP;

/// Compile a selector literal. Only called with constant selectors.
pub fn sel(css: &'static str) -> Selector {
    match Selector::parse(css) {
        Ok(s) => s,
        Err(e) => panic!("bad selector {css:?}: {e}"),
    }
}

/// Visible text of an element: each text node trimmed, empty ones dropped,
/// the rest glued together with no separator.
pub fn strip_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Raw (untrimmed) text of an element, for substring probes.
pub fn raw_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// First match of `selector` under `el`, stripped; empty when absent.
pub fn first_text(el: ElementRef<'_>, selector: &Selector) -> String {
    el.select(selector).next().map(strip_text).unwrap_or_default()
}

/// Next sibling element named `tag` (skips text nodes and other tags).
pub fn next_sibling_named<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name().eq_ignore_ascii_case(tag))
}

/// "2024-01-01~2024-01-31" → "2024-01-31". Text without a separator comes back trimmed.
pub fn range_end(text: &str) -> String {
    s!(text.rsplit(RANGE_SEP).next().unwrap_or(text).trim())
}

/// "2024-01-01" → "2024-01-01~"; already open-ended text is left alone.
pub fn open_range(text: &str) -> String {
    if text.ends_with(RANGE_SEP) {
        s!(text)
    } else {
        let mut out = s!(text);
        out.push(RANGE_SEP);
        out
    }
}
