// src/file.rs

use std::{
    fs::{self, OpenOptions},
    io::{BufWriter, Write},
    path::Path,
};

use crate::csv::{info_line, write_records};
use crate::scrape::AdvisorRecord;

/// Append one page's records to the output file, creating it on first
/// use. Open-append-close per call: a crash later in the run cannot
/// take already-written pages with it, and a re-run keeps appending
/// to the same file rather than replacing it.
pub fn append_records(path: &Path, records: &[AdvisorRecord]) -> Result<(), Box<dyn std::error::Error>> {
    if records.is_empty() {
        return Ok(());
    }
    let mut out = BufWriter::new(open_append(path)?);
    write_records(&mut out, records)?;
    out.flush()?;
    Ok(())
}

/// Append one biography line to the companion info file.
pub fn append_info(path: &Path, rec: &AdvisorRecord, info: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = BufWriter::new(open_append(path)?);
    writeln!(out, "{}", info_line(rec, info))?;
    out.flush()?;
    Ok(())
}

fn open_append(path: &Path) -> Result<fs::File, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
