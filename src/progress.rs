// src/progress.rs
use crate::record::Site;

/// Lightweight progress reporting for a collection run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of sites to visit.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A listing page is about to be fetched.
    fn page(&mut self, _site: Site, _page: u32, _last: u32) {}

    /// One site finished, with how many records it produced.
    fn site_done(&mut self, _site: Site, _records: usize) {}

    /// Called at the end of the crawl, before export.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
