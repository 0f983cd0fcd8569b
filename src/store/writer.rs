//! Store Writer
//!
//! Overwrites the data file with the current collection.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::record::Record;

/// Line terminator used by the host platform
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Write `records` to `path`, one line each, replacing any previous content
pub fn save(path: &Path, records: &[Record]) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    let mut writer = BufWriter::new(file);
    for record in records {
        writer.write_all(record.to_line().as_bytes())?;
        writer.write_all(LINE_ENDING.as_bytes())?;
    }
    writer.flush()?;

    tracing::info!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}
