// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::config::consts::HEADERS;
use crate::csv::{write_row, UTF8_BOM};
use crate::error::{Error, Result};
use crate::record::Record;

/// Write the run's records as a four-column table: header row, then one row per record.
/// Parent directories are created as needed.
pub fn export_records(path: &Path, records: &[Record]) -> Result<()> {
    write_table(path, records).map_err(|source| Error::Export { path: path.to_path_buf(), source })
}

fn write_table(path: &Path, records: &[Record]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(UTF8_BOM)?;
    write_row(&mut w, &HEADERS, ',')?;
    for r in records {
        write_row(&mut w, &r.cells(), ',')?;
    }
    w.flush()
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() {
        if dir.is_dir() {
            return Ok(());
        }
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists and is not a directory", dir.display()),
        ));
    }
    fs::create_dir_all(dir)
}
