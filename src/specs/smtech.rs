// src/specs/smtech.rs
//! SMTECH: positional cells in `table.tbl_base.tbl_type01`.
//!
//! Columns: 3rd = title, 4th = application period ("start~end"), 6th = status,
//! where status is usually an icon whose `alt` carries the label.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::html::{range_end, sel, strip_text};
use crate::record::Listing;
use crate::status::Status;

/// Rows with fewer cells are header/footer artifacts.
pub const MIN_CELLS: usize = 6;

static TABLE: LazyLock<Selector> = LazyLock::new(|| sel("table.tbl_base.tbl_type01"));
static ROWS: LazyLock<Selector> = LazyLock::new(|| sel("tbody tr"));
static CELLS: LazyLock<Selector> = LazyLock::new(|| sel("td"));
static ICON: LazyLock<Selector> = LazyLock::new(|| sel("img"));

pub fn rows(doc: &Html) -> Option<Vec<ElementRef<'_>>> {
    let table = doc.select(&TABLE).next()?;
    Some(table.select(&ROWS).collect())
}

pub fn extract(row: ElementRef<'_>) -> Option<Listing> {
    let tds: Vec<ElementRef<'_>> = row.select(&CELLS).collect();
    if tds.len() < MIN_CELLS {
        return None;
    }

    let title = strip_text(tds[2]);
    let deadline = range_end(&strip_text(tds[3]));

    let status_td = tds[5];
    let status = match status_td.select(&ICON).next().and_then(|img| img.attr("alt")) {
        Some(alt) => s!(alt.trim()),
        None => strip_text(status_td),
    };

    Some(Listing { title, deadline, status: Status::Reported(status) })
}

pub fn parse_doc(doc: &Html) -> Option<Vec<Listing>> {
    Some(rows(doc)?.into_iter().filter_map(extract).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(body: &str) -> String {
        format!(r#"<table class="tbl_base tbl_type01"><tbody>{body}</tbody></table>"#)
    }

    #[test]
    fn keeps_period_end_and_icon_label() {
        let doc = Html::parse_document(&table(
            r#"<tr>
                 <td>10</td><td>기술개발</td>
                 <td><a href="/x">창업성장 기술개발 공고</a></td>
                 <td>2024-01-01~2024-01-31</td>
                 <td>중기부</td>
                 <td><img src="/ico.gif" alt=" 접수중 "></td>
               </tr>"#,
        ));
        let got = parse_doc(&doc).unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].title, "창업성장 기술개발 공고");
        assert_eq!(got[0].deadline, "2024-01-31");
        assert_eq!(got[0].status, Status::Reported(s!("접수중")));
    }

    #[test]
    fn status_falls_back_to_cell_text() {
        let doc = Html::parse_document(&table(
            "<tr><td>1</td><td>b</td><td>t</td><td>2024-02-01</td><td>e</td><td> 마감 </td></tr>
             <tr><td>1</td><td>b</td><td>t</td><td>x</td><td>e</td><td><img src='a.gif'>공고중</td></tr>",
        ));
        let got = parse_doc(&doc).unwrap();
        assert_eq!(got[0].deadline, "2024-02-01");
        assert_eq!(got[0].status, Status::Reported(s!("마감")));
        assert_eq!(got[1].status, Status::Reported(s!("공고중")));
    }

    #[test]
    fn short_rows_are_skipped() {
        let doc = Html::parse_document(&table(
            "<tr><td colspan='6'>등록된 게시물이 없습니다</td></tr>
             <tr><td>1</td><td>2</td><td>3</td><td>4</td><td>5</td></tr>",
        ));
        assert!(parse_doc(&doc).unwrap().is_empty());
    }

    #[test]
    fn needs_both_classes() {
        let doc = Html::parse_document(
            "<table class='tbl_base'><tbody><tr><td>1</td><td>2</td><td>3</td><td>4</td><td>5</td><td>6</td></tr></tbody></table>",
        );
        assert!(parse_doc(&doc).is_none());
    }
}
