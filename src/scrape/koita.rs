// src/scrape/koita.rs
//! Two-phase adapter: listing row → post number → detail page → fields.

use std::ops::RangeInclusive;

use crate::{
    config::consts::{KOITA_MAX_ITEMS, KOITA_PAGES},
    core::Fetch,
    record::{koita_detail_url, Listing, Record, Site},
    specs::koita,
    status::{self, Status},
};

use super::{fetch_doc, Adapter};

pub struct KoitaAdapter;

impl Adapter for KoitaAdapter {
    fn site(&self) -> Site { Site::Koita }
    fn pages(&self) -> RangeInclusive<u32> { 1..=KOITA_PAGES }
    fn cap(&self) -> Option<usize> { Some(KOITA_MAX_ITEMS) }

    fn enumerate(&self, page: u32, fetch: &mut dyn Fetch, room: usize) -> Vec<Record> {
        let site = Site::Koita;
        let url = site.page_url(page);
        let Some(doc) = fetch_doc(site, fetch, &url) else {
            return Vec::new();
        };
        let Some(rows) = koita::rows(&doc) else {
            logw!(site = %site, page, "listing container not found; page skipped");
            return Vec::new();
        };

        let today = status::today();
        let mut out = Vec::new();

        for row in rows {
            if out.len() >= room {
                break;
            }
            // Rows without a post link are notices/decoration.
            let Some(no) = koita::post_no(row) else { continue };

            let detail_url = koita_detail_url(page, &no);
            let Some(detail_doc) = fetch_doc(site, fetch, &detail_url) else {
                continue;
            };
            let detail = koita::extract_detail(&detail_doc);
            let status = Status::from_deadline(&detail.deadline, today);

            let listing = Listing {
                title: detail.title,
                deadline: detail.deadline,
                status,
            };
            if let Some(rec) = Record::from_listing(&detail_url, listing) {
                out.push(rec);
            }
        }
        out
    }
}
