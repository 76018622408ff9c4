// src/specs/ntis.rs
//! NTIS: a `table.basic_list` whose cells are tagged with `data-title`.
//! The site publishes its own status column; everything is taken verbatim.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::html::{sel, strip_text};
use crate::record::Listing;
use crate::status::Status;

static TABLE: LazyLock<Selector> = LazyLock::new(|| sel("table.basic_list"));
static ROWS: LazyLock<Selector> = LazyLock::new(|| sel("tbody tr"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| sel(r#"td[data-title="공고명"]"#));
static DEADLINE: LazyLock<Selector> = LazyLock::new(|| sel(r#"td[data-title="마감일"]"#));
static STATUS: LazyLock<Selector> = LazyLock::new(|| sel(r#"td[data-title="현황"]"#));

/// Announcement rows, or `None` if the listing table is missing.
pub fn rows(doc: &Html) -> Option<Vec<ElementRef<'_>>> {
    let table = doc.select(&TABLE).next()?;
    Some(table.select(&ROWS).collect())
}

/// `None` when the row carries none of the tagged cells (e.g. a "no results" row).
pub fn extract(row: ElementRef<'_>) -> Option<Listing> {
    let title = row.select(&TITLE).next();
    let deadline = row.select(&DEADLINE).next();
    let status = row.select(&STATUS).next();
    if title.is_none() && deadline.is_none() && status.is_none() {
        return None;
    }

    Some(Listing {
        title: title.map(strip_text).unwrap_or_default(),
        deadline: deadline.map(strip_text).unwrap_or_default(),
        status: Status::Reported(status.map(strip_text).unwrap_or_default()),
    })
}

pub fn parse_doc(doc: &Html) -> Option<Vec<Listing>> {
    Some(rows(doc)?.into_iter().filter_map(extract).collect())
}
