// src/scrape/listing.rs
//! Single-phase adapters: every field is on the listing page itself.

use std::ops::RangeInclusive;

use scraper::Html;

use crate::{
    config::consts::{NIA_PAGES, NTIS_PAGES, SMTECH_PAGES},
    core::Fetch,
    record::{Listing, Record, Site},
    specs,
};

use super::{fetch_doc, to_records, Adapter};

type ParseDoc = fn(&Html) -> Option<Vec<Listing>>;

fn enumerate_listing(site: Site, page: u32, fetch: &mut dyn Fetch, parse: ParseDoc) -> Vec<Record> {
    let url = site.page_url(page);
    let Some(doc) = fetch_doc(site, fetch, &url) else {
        return Vec::new();
    };

    match parse(&doc) {
        Some(listings) => to_records(&url, listings),
        None => {
            logw!(site = %site, page, "listing container not found; page skipped");
            Vec::new()
        }
    }
}

pub struct NtisAdapter;

impl Adapter for NtisAdapter {
    fn site(&self) -> Site { Site::Ntis }
    fn pages(&self) -> RangeInclusive<u32> { 1..=NTIS_PAGES }

    fn enumerate(&self, page: u32, fetch: &mut dyn Fetch, _room: usize) -> Vec<Record> {
        enumerate_listing(Site::Ntis, page, fetch, specs::ntis::parse_doc)
    }
}

pub struct SmtechAdapter;

impl Adapter for SmtechAdapter {
    fn site(&self) -> Site { Site::Smtech }
    fn pages(&self) -> RangeInclusive<u32> { 1..=SMTECH_PAGES }

    fn enumerate(&self, page: u32, fetch: &mut dyn Fetch, _room: usize) -> Vec<Record> {
        enumerate_listing(Site::Smtech, page, fetch, specs::smtech::parse_doc)
    }
}

pub struct NiaAdapter;

impl Adapter for NiaAdapter {
    fn site(&self) -> Site { Site::Nia }
    fn pages(&self) -> RangeInclusive<u32> { 1..=NIA_PAGES }

    fn enumerate(&self, page: u32, fetch: &mut dyn Fetch, _room: usize) -> Vec<Record> {
        enumerate_listing(Site::Nia, page, fetch, specs::nia::parse_doc)
    }
}
