// src/csv.rs
use std::io::{self, Write};

use crate::scrape::AdvisorRecord;

// Fixed four-column line, raw joins:
//
//   {major},{subject},{name}, {url}
//
// No quoting or escaping, and the space ahead of the url is part of
// the format. A comma inside a field shifts that line's columns;
// downstream consumers of the existing files expect exactly this, so
// it stays byte-for-byte as is.

/// One advisor line, without the trailing newline.
pub fn record_line(rec: &AdvisorRecord) -> String {
    format!("{},{},{}, {}", rec.major, rec.subject, rec.name, rec.url)
}

/// One biography line for the companion info file.
pub fn info_line(rec: &AdvisorRecord, info: &str) -> String {
    format!("{},{}, {}", rec.name, rec.url, info)
}

/// Write advisor lines to any writer.
pub fn write_records<W: Write>(mut w: W, records: &[AdvisorRecord]) -> io::Result<()> {
    for rec in records {
        writeln!(w, "{}", record_line(rec))?;
    }
    Ok(())
}
