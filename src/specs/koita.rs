// src/specs/koita.rs
//! KOITA: two-phase.
//!
//! The listing table (`table.tb.tb_col.tb_bd.tb_st01`) only yields a post number,
//! hidden in a `javascript:page_move({no: 563})` style link. Title and the
//! announcement period live on the detail page.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::core::html::{first_text, next_sibling_named, range_end, raw_text, sel, strip_text};

static TABLE: LazyLock<Selector> = LazyLock::new(|| sel("table.tb.tb_col.tb_bd.tb_st01"));
static ROWS: LazyLock<Selector> = LazyLock::new(|| sel("tbody tr"));
static LINKS: LazyLock<Selector> = LazyLock::new(|| sel("a[href]"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| sel(".f_st01"));
static HEADERS: LazyLock<Selector> = LazyLock::new(|| sel("th"));
static DIV: LazyLock<Selector> = LazyLock::new(|| sel("div"));

static POST_NO: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"\{\s*no:\s*(\d+)\s*\}") {
        Ok(re) => re,
        Err(e) => panic!("bad post number pattern: {e}"),
    }
});

const PERIOD_LABEL: &str = "공고기간";

pub fn rows(doc: &Html) -> Option<Vec<ElementRef<'_>>> {
    let table = doc.select(&TABLE).next()?;
    Some(table.select(&ROWS).collect())
}

/// Post number from the row's `page_move` link, if any.
pub fn post_no(row: ElementRef<'_>) -> Option<String> {
    let href = row
        .select(&LINKS)
        .filter_map(|a| a.attr("href"))
        .find(|h| h.contains("page_move"))?;
    let caps = POST_NO.captures(href)?;
    Some(s!(caps.get(1)?.as_str()))
}

/// What the detail page contributes. Status is derived later from `deadline`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Detail {
    pub title: String,
    pub deadline: String,
}

pub fn extract_detail(doc: &Html) -> Detail {
    let title = first_text(doc.root_element(), &TITLE);

    // Only the first header mentioning the period is considered.
    let deadline = doc
        .select(&HEADERS)
        .find(|th| raw_text(*th).contains(PERIOD_LABEL))
        .and_then(|th| next_sibling_named(th, "td"))
        .and_then(|td| td.select(&DIV).next())
        .map(|div| range_end(&strip_text(div)))
        .unwrap_or_default();

    Detail { title, deadline }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = r#"
        <table class="tb tb_col tb_bd tb_st01"><tbody>
          <tr><td>563</td><td><a href="javascript:page_move({no: 563});">연구소 지원 공고</a></td></tr>
          <tr><td>562</td><td><a href="javascript:page_move({ no:562 })">다음 공고</a></td></tr>
          <tr><td>공지</td><td><a href="/board/other.do">외부 링크</a></td></tr>
          <tr><td>561</td><td><a href="javascript:page_move();">번호 없음</a></td></tr>
        </tbody></table>"#;

    #[test]
    fn post_numbers_from_page_move_links() {
        let doc = Html::parse_document(LIST);
        let nos: Vec<Option<String>> = rows(&doc).unwrap().into_iter().map(post_no).collect();
        assert_eq!(nos, vec![Some(s!("563")), Some(s!("562")), None, None]);
    }

    #[test]
    fn missing_listing_table_is_none() {
        let doc = Html::parse_document("<table class='tb'><tbody><tr><td>x</td></tr></tbody></table>");
        assert!(rows(&doc).is_none());
    }

    #[test]
    fn detail_title_and_period_end() {
        let doc = Html::parse_document(
            r#"<div class="view">
                 <p class="f_st01"> 2025 우수 기업연구소 지정 공고 </p>
                 <table>
                   <tr><th>작성일</th><td><div>2025-01-02</div></td></tr>
                   <tr><th> 공고기간 </th><td><div>2025-01-02 ~ 2099-02-28</div></td></tr>
                 </table>
               </div>"#,
        );
        let d = extract_detail(&doc);
        assert_eq!(d.title, "2025 우수 기업연구소 지정 공고");
        assert_eq!(d.deadline, "2099-02-28");
    }

    #[test]
    fn detail_without_period_has_empty_deadline() {
        let doc = Html::parse_document(
            r#"<table><tr><th>공고기간</th><td>2025-01-02~2025-02-01</td></tr></table>"#,
        );
        let d = extract_detail(&doc);
        assert_eq!(d, Detail::default());
    }

    #[test]
    fn same_input_same_output() {
        let a = extract_detail(&Html::parse_document("<p class='f_st01'>x</p>"));
        let b = extract_detail(&Html::parse_document("<p class='f_st01'>x</p>"));
        assert_eq!(a, b);
    }
}
