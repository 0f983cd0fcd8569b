//! Store Reader
//!
//! Loads the data file into an ordered list of records.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::error::RosterError;
use crate::record::{self, Record};

/// A load that stopped early
///
/// Carries the records read before the failure so the caller can keep
/// working with them.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct PartialLoad {
    /// Records parsed before the failing line, in file order
    pub records: Vec<Record>,

    /// What stopped the load
    #[source]
    pub error: RosterError,
}

/// Load all records from `path`
///
/// - Missing file: an empty file is created and an empty list returned
/// - Blank lines (after trimming) are skipped
/// - The first I/O or parse failure stops the load
pub fn load(path: &Path) -> Result<Vec<Record>, PartialLoad> {
    let mut records = Vec::new();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("Data file {} not found, creating it", path.display());
            return match OpenOptions::new().create(true).write(true).open(path) {
                Ok(_) => Ok(records),
                Err(e) => Err(PartialLoad {
                    records,
                    error: e.into(),
                }),
            };
        }
        Err(e) => {
            return Err(PartialLoad {
                records,
                error: e.into(),
            })
        }
    };

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => line_no += 1,
            Err(e) => {
                return Err(PartialLoad {
                    records,
                    error: e.into(),
                })
            }
        }

        // Bytes that are not UTF-8 become U+FFFD instead of failing the load
        let line = record::decode_line(&buf);

        if line.trim().is_empty() {
            continue;
        }

        match Record::from_line(&line) {
            Ok(record) => records.push(record),
            Err(e) => {
                let reason = match e {
                    RosterError::Format(reason) => reason,
                    other => other.to_string(),
                };
                return Err(PartialLoad {
                    records,
                    error: RosterError::MalformedLine {
                        line: line_no,
                        reason,
                    },
                });
            }
        }
    }

    tracing::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
