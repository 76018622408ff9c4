// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Knobs for one collection run. Everything defaults to the compiled-in constants;
/// nothing is read from flags, environment or disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub crawl: CrawlOptions,
    pub export: ExportOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            crawl: CrawlOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrawlOptions {
    /// Pause between two consecutive requests, listing or detail.
    pub pause: Duration,
    pub timeout: Duration,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
            timeout: Duration::from_secs(TIMEOUT_SECS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub dir: PathBuf,
    pub file_stem: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: s!(DEFAULT_FILE),
        }
    }
}

impl ExportOptions {
    pub fn ext(&self) -> &'static str { "csv" }

    pub fn out_path(&self) -> PathBuf {
        self.dir.join(join!(&self.file_stem, ".", self.ext()))
    }
}
