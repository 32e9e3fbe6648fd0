//! Store reader
//!
//! Reads the full catalog table from a CSV store file.

use std::fs::File;
use std::io;
use std::path::Path;

use tracing::warn;

use crate::error::Result;
use crate::record::Record;

/// Read every record from the store at `path`
///
/// A missing file is the one recoverable failure: it means no catalog has
/// been saved yet, so an empty table is returned and a warning logged.
/// Everything else (permission errors, malformed rows, non-integer numeric
/// cells, missing columns) propagates to the caller.
pub(super) fn read_records(path: &Path) -> Result<Vec<Record>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(
                path = %path.display(),
                "catalog store not found; starting with an empty catalog"
            );
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };

    // Header row is mapped onto Record fields by name; a zero-byte file
    // yields no headers and no rows, which loads as an empty catalog.
    let mut reader = csv::Reader::from_reader(file);

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }

    Ok(records)
}
