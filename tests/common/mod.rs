// tests/common/mod.rs
//
// Scripted in-memory fetcher + page fixtures shaped like the live sites.
#![allow(dead_code)]

use std::collections::HashMap;

use notice_scrape::core::Fetch;
use notice_scrape::FetchError;

/// Serves canned bodies by exact URL; anything unscripted is a 404.
/// Records every URL asked for, in order.
#[derive(Default)]
pub struct Scripted {
    pages: HashMap<String, Result<String, u16>>,
    pub requests: Vec<String>,
}

impl Scripted {
    pub fn new() -> Self { Self::default() }

    pub fn ok(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), Ok(body.into()));
        self
    }

    pub fn status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.pages.insert(url.into(), Err(status));
        self
    }

    pub fn count_for(&self, prefix: &str) -> usize {
        self.requests.iter().filter(|u| u.starts_with(prefix)).count()
    }
}

impl Fetch for Scripted {
    fn get(&mut self, url: &str) -> Result<String, FetchError> {
        self.requests.push(url.to_string());
        match self.pages.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(FetchError::Status { url: url.to_string(), status: *status }),
            None => Err(FetchError::Status { url: url.to_string(), status: 404 }),
        }
    }
}

pub fn ntis_page(rows: &[(&str, &str, &str)]) -> String {
    let body: String = rows
        .iter()
        .map(|(status, title, deadline)| {
            format!(
                r#"<tr><td data-title="번호">1</td><td data-title="현황">{status}</td>
                   <td data-title="공고명"><a href="/view">{title}</a></td>
                   <td data-title="마감일">{deadline}</td></tr>"#
            )
        })
        .collect();
    format!(r#"<html><body><table class="basic_list"><tbody>{body}</tbody></table></body></html>"#)
}

pub fn smtech_page(rows: &[(&str, &str, &str)]) -> String {
    let body: String = rows
        .iter()
        .map(|(title, period, alt)| {
            format!(
                r#"<tr><td>1</td><td>구분</td><td><a href="/v">{title}</a></td><td>{period}</td>
                   <td>기관</td><td><img src="/i.gif" alt="{alt}"></td></tr>"#
            )
        })
        .collect();
    format!(r#"<table class="tbl_base tbl_type01"><tbody>{body}</tbody></table>"#)
}

pub fn nia_page(items: &[(&str, &str)]) -> String {
    let body: String = items
        .iter()
        .map(|(subject, src)| {
            format!(
                r#"<li><a href="/v"><span class="subject searchItem">{subject}</span>
                   <span class="src">{src}</span></a></li>"#
            )
        })
        .collect();
    format!(r#"<div class="board_type01"><ul>{body}</ul></div>"#)
}

pub fn koita_list(nos: &[u32]) -> String {
    let body: String = nos
        .iter()
        .map(|no| {
            format!(
                r#"<tr><td>{no}</td><td class="subject"><a href="javascript:page_move({{no: {no}}});">공고 {no}</a></td></tr>"#
            )
        })
        .collect();
    format!(r#"<table class="tb tb_col tb_bd tb_st01"><tbody>{body}</tbody></table>"#)
}

pub fn koita_detail(title: &str, period: &str) -> String {
    format!(
        r#"<div class="board_view">
             <h4 class="f_st01">{title}</h4>
             <table><tbody>
               <tr><th>등록일</th><td><div>2025-01-01</div></td></tr>
               <tr><th>공고기간</th><td><div>{period}</div></td></tr>
             </tbody></table>
           </div>"#
    )
}
