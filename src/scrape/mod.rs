// src/scrape/mod.rs
//! Site adapters: pagination + fetch + `specs` parsing for one source each.

use std::ops::RangeInclusive;

use scraper::Html;

use crate::{
    core::Fetch,
    progress::Progress,
    record::{Listing, Record, Site},
};

mod koita;
mod listing;

pub use koita::KoitaAdapter;
pub use listing::{NiaAdapter, NtisAdapter, SmtechAdapter};

/// Shared shape of the four site adapters.
pub trait Adapter: Sync {
    fn site(&self) -> Site;

    /// Fixed page range, not discovered from the site.
    fn pages(&self) -> RangeInclusive<u32>;

    /// Upper bound on records for the whole site, if any.
    fn cap(&self) -> Option<usize> { None }

    /// Records of one listing page, in row order, at most `room` of them.
    /// Failures are logged and yield fewer (or no) records.
    fn enumerate(&self, page: u32, fetch: &mut dyn Fetch, room: usize) -> Vec<Record>;
}

pub static NTIS: NtisAdapter = NtisAdapter;
pub static SMTECH: SmtechAdapter = SmtechAdapter;
pub static NIA: NiaAdapter = NiaAdapter;
pub static KOITA: KoitaAdapter = KoitaAdapter;

pub fn adapter_for(site: Site) -> &'static dyn Adapter {
    match site {
        Site::Ntis => &NTIS,
        Site::Smtech => &SMTECH,
        Site::Nia => &NIA,
        Site::Koita => &KOITA,
    }
}

/// Walk an adapter's page range, stopping early once its cap is reached.
pub fn collect_site(
    adapter: &dyn Adapter,
    fetch: &mut dyn Fetch,
    progress: &mut dyn Progress,
) -> Vec<Record> {
    let site = adapter.site();
    let cap = adapter.cap().unwrap_or(usize::MAX);
    let pages = adapter.pages();
    let last = *pages.end();

    let mut out: Vec<Record> = Vec::new();
    for page in pages {
        if out.len() >= cap {
            logf!(site = %site, cap, "item cap reached; remaining pages skipped");
            break;
        }
        progress.page(site, page, last);

        let room = cap - out.len();
        let mut got = adapter.enumerate(page, fetch, room);
        got.truncate(room);
        logd!(site = %site, page, records = got.len(), "page done");
        out.append(&mut got);
    }

    progress.site_done(site, out.len());
    out
}

/// GET + parse, logging and swallowing failures.
fn fetch_doc(site: Site, fetch: &mut dyn Fetch, url: &str) -> Option<Html> {
    match fetch.get(url) {
        Ok(body) => Some(Html::parse_document(&body)),
        Err(e) => {
            logw!(site = %site, error = %e, "page unreachable; skipped");
            None
        }
    }
}

/// Attach the page host to extracted listings.
fn to_records(url: &str, listings: Vec<Listing>) -> Vec<Record> {
    listings
        .into_iter()
        .filter_map(|l| Record::from_listing(url, l))
        .collect()
}
