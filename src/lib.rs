// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod gui;
pub mod progress;
pub mod record;
pub mod runner;
pub mod scrape;
pub mod specs;
pub mod status;

pub use error::{Error, FetchError};
pub use record::{Record, Site};
pub use status::Status;
