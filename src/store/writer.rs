//! Store writer
//!
//! Rewrites the full catalog table to a CSV store file.

use std::fs::OpenOptions;
use std::path::Path;

use crate::error::Result;
use crate::record::Record;

use super::STORE_HEADER;

/// Write the full table to the store at `path`, replacing previous content
///
/// The write is a plain truncate-and-rewrite: the header row first (always,
/// even for an empty table), then one row per record in table order. No
/// temp-file swap or backup is made.
pub(super) fn write_records(path: &Path, records: &[Record]) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    // The header is written explicitly so it appears even when the table is
    // empty; automatic headers would only be emitted with the first row.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer.write_record(STORE_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}
