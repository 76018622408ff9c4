// src/runner.rs
//! Orchestrator: visits every site in a fixed order, one request at a time,
//! then hands the collected records to the export step.

use std::path::PathBuf;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::{
    config::options::Options,
    core::{Fetch, HttpFetcher, Polite},
    error::{Error, Result},
    file,
    progress::{NullProgress, Progress},
    record::{Record, Site},
    scrape,
};

/// Where a run currently is. Sites run strictly one after another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running(Site),
    Done,
}

impl Phase {
    pub fn first() -> Self { Phase::Running(Site::ALL[0]) }

    pub fn next(self) -> Self {
        match self {
            Phase::Running(site) => {
                let i = Site::ALL.iter().position(|s| *s == site).unwrap_or(Site::ALL.len());
                Site::ALL.get(i + 1).map_or(Phase::Done, |s| Phase::Running(*s))
            }
            Phase::Done => Phase::Done,
        }
    }
}

/// Crawl all sites through `fetch`. Never fails: unreachable pages and layout
/// drift only reduce the number of records.
///
/// Records come out in site order, then page order, then row order.
pub fn run(fetch: &mut dyn Fetch, progress: Option<&mut dyn Progress>) -> Vec<Record> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    progress.begin(Site::ALL.len());

    let mut records: Vec<Record> = Vec::new();
    let mut phase = Phase::first();

    while let Phase::Running(site) = phase {
        logf!(site = %site, "collecting");
        progress.log(&format!("Collecting {site}…"));
        let adapter = scrape::adapter_for(site);
        let mut got = scrape::collect_site(adapter, fetch, progress);
        logf!(site = %site, records = got.len(), "site done");
        records.append(&mut got);
        phase = phase.next();
    }

    progress.finish();
    records
}

/// What a finished run produced: the written file and the records in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub path: PathBuf,
    pub records: Vec<Record>,
}

impl RunSummary {
    /// The one line shown to the user when a run completes.
    pub fn ack(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        format!("Saved as {} ({} records)", name, self.records.len())
    }
}

/// Full run against the live sites: polite HTTP crawl, then export.
pub fn collect(opts: &Options, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let http = HttpFetcher::new(opts.crawl.timeout).map_err(|e| Error::Client(Box::new(e)))?;
    let mut fetch = Polite::new(http, opts.crawl.pause);
    collect_with(opts, &mut fetch, progress)
}

/// `collect` with a caller-supplied fetcher.
pub fn collect_with(
    opts: &Options,
    fetch: &mut dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let records = run(fetch, progress);
    let path = opts.export.out_path();

    match file::export_records(&path, &records) {
        Ok(()) => {
            logf!(path = %path.display(), records = records.len(), "export written");
            Ok(RunSummary { path, records })
        }
        Err(e) => {
            loge!(error = %e, "export failed");
            Err(e)
        }
    }
}

/// Guards against overlapping runs: at most one ticket exists at a time.
#[derive(Clone, Debug, Default)]
pub struct RunSlot {
    busy: Arc<AtomicBool>,
}

impl RunSlot {
    pub fn new() -> Self { Self::default() }

    /// A ticket if no run is in flight, else `None`.
    pub fn try_acquire(&self) -> Option<RunTicket> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RunTicket { busy: Arc::clone(&self.busy) })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Held for the duration of one run; frees the slot on drop.
#[derive(Debug)]
pub struct RunTicket {
    busy: Arc<AtomicBool>,
}

impl Drop for RunTicket {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_follow_site_order() {
        let mut seen = Vec::new();
        let mut phase = Phase::first();
        while let Phase::Running(site) = phase {
            seen.push(site);
            phase = phase.next();
        }
        assert_eq!(seen, Site::ALL.to_vec());
        assert_eq!(Phase::Done.next(), Phase::Done);
    }

    #[test]
    fn slot_rejects_second_run_until_released() {
        let slot = RunSlot::new();
        let first = slot.try_acquire();
        assert!(first.is_some());
        assert!(slot.is_busy());
        assert!(slot.try_acquire().is_none());

        drop(first);
        assert!(!slot.is_busy());
        assert!(slot.try_acquire().is_some());
    }

    #[test]
    fn ack_names_the_file() {
        let s = RunSummary { path: PathBuf::from("out/announcements.csv"), records: Vec::new() };
        assert_eq!(s.ack(), "Saved as announcements.csv (0 records)");
    }
}
