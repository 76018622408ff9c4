// src/record.rs
use std::fmt;

use url::Url;

use crate::config::consts::*;
use crate::status::Status;

/// One normalized announcement row. Built once, never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Host the data came from; never empty.
    pub site: String,
    pub title: String,
    pub deadline: String,
    pub status: Status,
}

impl Record {
    /// Attach the host of `url` to extracted fields.
    /// Returns `None` only if the URL has no host.
    pub fn from_listing(url: &str, listing: Listing) -> Option<Self> {
        let site = host_of(url)?;
        Some(Self {
            site,
            title: listing.title,
            deadline: listing.deadline,
            status: listing.status,
        })
    }

    /// Cells in export column order: site, title, deadline, status.
    pub fn cells(&self) -> [String; 4] {
        [
            self.site.clone(),
            self.title.clone(),
            self.deadline.clone(),
            self.status.to_string(),
        ]
    }
}

/// Fields pulled out of one fragment, before the host is known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    pub title: String,
    pub deadline: String,
    pub status: Status,
}

pub fn host_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed.host_str().filter(|h| !h.is_empty()).map(str::to_string)
}

/// The four sources, in the order a run visits them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Site {
    Ntis,
    Smtech,
    Nia,
    Koita,
}

impl Site {
    pub const ALL: [Site; 4] = [Site::Ntis, Site::Smtech, Site::Nia, Site::Koita];

    pub fn label(self) -> &'static str {
        match self {
            Site::Ntis => "NTIS",
            Site::Smtech => "SMTECH",
            Site::Nia => "NIA",
            Site::Koita => "KOITA",
        }
    }

    /// Listing URL for a 1-based page number.
    pub fn page_url(self, page: u32) -> String {
        let n = page.to_string();
        match self {
            Site::Ntis => join!(NTIS_LIST, &n),
            Site::Smtech => join!(SMTECH_LIST, &n),
            Site::Nia => join!(NIA_LIST, &n),
            Site::Koita => join!(KOITA_LIST, &n, "&"),
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// KOITA detail page for a listing row number seen on `page`.
pub fn koita_detail_url(page: u32, no: &str) -> String {
    join!(KOITA_VIEW, &page.to_string(), "&no=", no)
}
