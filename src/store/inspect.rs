//! Store Inspection
//!
//! Reads facts about the data file straight from disk. Nothing here looks at
//! the in-memory collection, so results reflect the last save.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::record;

/// Filesystem attributes of the data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttributes {
    /// Final path component
    pub name: String,
    /// Absolute location
    pub path: PathBuf,
    /// Size in bytes (0 when the file is missing)
    pub size: u64,
    pub readable: bool,
    pub writable: bool,
}

/// Gather attributes of `path` at call time
///
/// A missing file is not an error: it reports size 0 and both flags false.
pub fn attributes(path: &Path) -> FileAttributes {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);

    // Opening for write without truncate leaves the content untouched.
    let readable = File::open(path).is_ok();
    let writable = OpenOptions::new().write(true).open(path).is_ok();

    FileAttributes {
        name,
        path: absolute,
        size,
        readable,
        writable,
    }
}

/// Read the first line of `path` by seeking to offset 0
///
/// Returns `Ok(None)` for an empty file. The line terminator is stripped.
pub fn read_first_line(path: &Path) -> Result<Option<String>> {
    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start(0))?;

    let mut buf = Vec::new();
    if BufReader::new(file).read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(record::decode_line(&buf)))
}
