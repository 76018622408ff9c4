// src/cli.rs
// Headless run: same crawl and export as the GUI button, progress on stderr.
use std::env;

use crate::{
    config::options::Options,
    error::Result,
    progress::Progress,
    record::Site,
    runner::{self, RunSummary},
};

const USAGE: &str = "Usage: cli\n\
    Collects announcements from NTIS, SMTECH, NIA and KOITA and writes announcements.csv.\n\
    Takes no options.";

struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn page(&mut self, site: Site, page: u32, last: u32) {
        eprintln!("{site}: page {page}/{last}");
    }
    fn site_done(&mut self, site: Site, records: usize) {
        eprintln!("{site}: {records} records");
    }
}

pub fn run() -> Result<RunSummary> {
    if let Some(arg) = env::args().nth(1) {
        eprintln!("{USAGE}");
        if arg != "-h" && arg != "--help" {
            eprintln!("Unknown arg: {arg}");
            std::process::exit(2);
        }
        std::process::exit(0);
    }

    runner::collect(&Options::default(), Some(&mut CliProgress))
}
