// src/specs/nia.rs
//! NIA: a `div.board_type01` list; one `li` per post.
//! The board shows only a start date and never reports a status.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::html::{open_range, sel, strip_text};
use crate::record::Listing;
use crate::status::Status;

static BOARD: LazyLock<Selector> = LazyLock::new(|| sel("div.board_type01"));
static ITEMS: LazyLock<Selector> = LazyLock::new(|| sel("li"));
static SUBJECT: LazyLock<Selector> = LazyLock::new(|| sel("span.subject.searchItem"));
static SRC: LazyLock<Selector> = LazyLock::new(|| sel("span.src"));

pub fn rows(doc: &Html) -> Option<Vec<ElementRef<'_>>> {
    let board = doc.select(&BOARD).next()?;
    Some(board.select(&ITEMS).collect())
}

/// `None` for list items that carry neither a subject nor a date span.
pub fn extract(item: ElementRef<'_>) -> Option<Listing> {
    let subject = item.select(&SUBJECT).next();
    let src = item.select(&SRC).next();
    if subject.is_none() && src.is_none() {
        return None;
    }

    Some(Listing {
        title: subject.map(strip_text).unwrap_or_default(),
        deadline: src.map(|s| open_range(&strip_text(s))).unwrap_or_default(),
        status: Status::Unknown,
    })
}

pub fn parse_doc(doc: &Html) -> Option<Vec<Listing>> {
    Some(rows(doc)?.into_iter().filter_map(extract).collect())
}
