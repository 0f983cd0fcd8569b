//! Manager Module
//!
//! Owns the in-memory record collection for one session.
//!
//! ## Responsibilities
//! - Load the collection from the data file on open
//! - Add, search, delete and sort records in memory
//! - Inspect the data file on disk
//! - Write the collection back on save
//!
//! Nothing is persisted until [`Manager::save`] is called.

use std::path::Path;

use crate::config::Config;
use crate::error::{Result, RosterError};
use crate::record::Record;
use crate::store::{self, FileAttributes};

/// The record manager
///
/// Single-threaded: every operation takes `&self` or `&mut self` and the
/// collection is never shared.
#[derive(Debug)]
pub struct Manager {
    /// Session configuration
    config: Config,

    /// Records in insertion order (or marks order after a sort)
    records: Vec<Record>,
}

impl Manager {
    /// Open a manager on the configured data file
    ///
    /// A failed load still yields a manager holding the records read before
    /// the failure; the error is handed back for the caller to report.
    pub fn open(config: Config) -> (Self, Option<RosterError>) {
        let (records, error) = match store::load(&config.data_file) {
            Ok(records) => (records, None),
            Err(partial) => {
                tracing::warn!(
                    "Load of {} stopped after {} records: {}",
                    config.data_file.display(),
                    partial.records.len(),
                    partial.error
                );
                (partial.records, Some(partial.error))
            }
        };

        (Self { config, records }, error)
    }

    /// Open a manager on `path` with default settings otherwise
    pub fn open_path(path: &Path) -> (Self, Option<RosterError>) {
        let mut config = Config::default();
        config.data_file = path.to_path_buf();
        Self::open(config)
    }

    /// Create a manager over an existing collection without touching disk
    pub fn with_records(config: Config, records: Vec<Record>) -> Self {
        Self { config, records }
    }

    /// Append a record
    pub fn add(&mut self, record: Record) {
        tracing::debug!("Adding roll no {} ({})", record.roll_no, record.name);
        self.records.push(record);
    }

    /// All records in current order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Every record whose name equals `name` ignoring case
    pub fn search_by_name(&self, name: &str) -> Vec<&Record> {
        self.records.iter().filter(|r| r.matches_name(name)).collect()
    }

    /// Remove every record whose name equals `name` ignoring case
    ///
    /// Returns how many were removed.
    pub fn delete_by_name(&mut self, name: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !r.matches_name(name));
        let removed = before - self.records.len();
        tracing::debug!("Removed {} records named {:?}", removed, name);
        removed
    }

    /// Sort ascending by marks (stable; NaN last)
    pub fn sort_by_marks(&mut self) {
        self.records.sort_by(|a, b| a.marks.total_cmp(&b.marks));
    }

    /// Attributes of the data file as it is on disk now
    pub fn file_attributes(&self) -> FileAttributes {
        store::attributes(&self.config.data_file)
    }

    /// First line of the data file as last saved
    pub fn read_first_line(&self) -> Result<Option<String>> {
        store::read_first_line(&self.config.data_file)
    }

    /// Write the collection to the data file
    pub fn save(&self) -> Result<()> {
        store::save(&self.config.data_file, &self.records)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of records held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the data file path
    pub fn data_file(&self) -> &Path {
        &self.config.data_file
    }
}
