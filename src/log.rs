// src/log.rs
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::consts::{LOG_FILE, LOG_FILTER, STORE_DIR};

static INIT: OnceLock<()> = OnceLock::new();

/// Install the global subscriber. Safe to call more than once; only the first call wins.
///
/// Lines go to `.store/debug.log`. If the file can't be opened, stderr is used instead.
pub fn init() {
    INIT.get_or_init(|| {
        let builder = fmt()
            .with_target(false)
            .with_ansi(false)
            .with_env_filter(EnvFilter::new(LOG_FILTER));

        let _ = fs::create_dir_all(STORE_DIR);
        let path = Path::new(STORE_DIR).join(LOG_FILE);
        // Err here only means another subscriber is already installed.
        let _ = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => builder.with_writer(Mutex::new(file)).try_init(),
            Err(_) => builder.with_writer(std::io::stderr).try_init(),
        };
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging: recoverable skips (missing page, missing container)
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
