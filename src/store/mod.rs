//! Store Module
//!
//! Persistent storage layer: the full catalog as one flat CSV file.
//!
//! ## Responsibilities
//! - Load the full table on open (missing file → empty catalog)
//! - Rewrite the full table after every mutation
//! - Keep the header row identical between load and save
//!
//! ## File Format
//! ```text
//! title,author,year,genre,copy_count          ← fixed header row
//! 1984,George Orwell,1949,SciFi,3             ← one row per record,
//! Animal Farm,George Orwell,1945,SciFi,2        in catalog order
//! ```
//!
//! UTF-8 throughout; values containing commas or quotes round-trip via
//! standard CSV quoting. No synthetic index column is ever written. There is
//! no atomic-write or backup strategy: a crash mid-write can corrupt the
//! store (accepted risk for a single-user catalog).

mod reader;
mod writer;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::record::Record;

// =============================================================================
// Shared Constants (used by reader and writer)
// =============================================================================

/// The fixed five-column header, in canonical column order
///
/// Matches the `Record` field names, so the reader can map rows by header
/// name through serde.
pub const STORE_HEADER: [&str; 5] = ["title", "author", "year", "genre", "copy_count"];

// =============================================================================
// Store Handle
// =============================================================================

/// Handle on the CSV store file
///
/// Holds only the path; every load reads the file in full and every save
/// rewrites it in full. The path can be re-pointed at runtime (the
/// file-picker contract of the presentation layer).
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Create a store handle for the given path
    ///
    /// The file does not have to exist; it is created on the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The current store file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-point the store at a different file
    pub fn retarget(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    /// Read the full table from the store
    ///
    /// Returns:
    /// - `Ok(records)` — table in file row order
    /// - `Ok(vec![])` — the file is absent (logged as a warning, not an
    ///   error) or zero bytes long
    /// - `Err(..)` — any other read or parse failure
    pub fn load(&self) -> Result<Vec<Record>> {
        reader::read_records(&self.path)
    }

    /// Rewrite the store with the given table, truncating previous content
    ///
    /// The header row is written even when the table is empty.
    pub fn save(&self, records: &[Record]) -> Result<()> {
        writer::write_records(&self.path, records)
    }
}
