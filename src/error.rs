// src/error.rs
//! Typed errors.
//!
//! Only two things can go wrong in a way the caller sees: a single fetch
//! (always recovered by skipping the page) and the final export.

use std::path::PathBuf;

use thiserror::Error;

/// Why a single GET did not produce a document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Connection, TLS, timeout or body decoding failure
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Status { url, .. } | FetchError::Transport { url, .. } => url,
        }
    }
}

/// Errors that interrupt a collection run.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP client could not be built
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Writing the output table failed
    #[error("could not write {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A run is already in flight
    #[error("a collection run is already in progress")]
    Busy,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
