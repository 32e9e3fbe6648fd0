//! Catalog Module
//!
//! The in-memory record table and its query/mutation semantics.
//!
//! ## Responsibilities
//! - Hold the full table as an ordered sequence of records
//! - Append/edit/delete mutations with title-based lookup
//! - Linear-scan search by author or year
//! - Aggregations backing the two chart views
//!
//! The catalog never touches storage; the
//! [`CatalogManager`](crate::CatalogManager) is responsible for persisting
//! it after every mutation. This keeps mutation semantics testable without a
//! store on disk.

use crate::error::Result;
use crate::record::{coerce_integer, Field, FieldValue, Record};

/// The in-memory catalog: an ordered sequence of records
///
/// Ordering is insertion order; every operation that returns records
/// preserves it. An empty catalog is a valid, displayable state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from an already-loaded table
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// The current table in row order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a record to the end of the table
    ///
    /// Duplicate titles are permitted; no uniqueness check is made.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Overwrite one field of the **first** record whose title matches
    ///
    /// Returns:
    /// - `Ok(true)` — a record was found and its field updated
    /// - `Ok(false)` — no title matched; the table is unchanged
    /// - `Err(TypeCoercion)` — the value's shape does not fit the field
    ///
    /// Only the first match is addressable; later records with the same
    /// title are left alone. Deletion deliberately behaves differently and
    /// removes every match, see [`Catalog::delete`].
    pub fn edit(&mut self, title: &str, field: Field, value: FieldValue) -> Result<bool> {
        match self.records.iter_mut().find(|r| r.title == title) {
            Some(record) => {
                record.set(field, value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove **all** records whose title matches exactly
    ///
    /// Returns the number of records removed; 0 means nothing matched and
    /// the table is unchanged. The order of the remaining records is
    /// preserved.
    pub fn delete(&mut self, title: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.title != title);
        before - self.records.len()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Search by author or publication year
    ///
    /// Exactly one criterion is applied:
    /// - `author` given (non-empty): exact, case-sensitive author match
    /// - else `year` given (non-empty): coerced to an integer
    ///   ([`TypeCoercion`](crate::ShelfError::TypeCoercion) on non-numeric
    ///   input), exact match
    /// - neither: empty result
    ///
    /// When both criteria are supplied, only the author filter is applied
    /// and the year input is ignored entirely. Empty strings count as "not
    /// given", matching the text-box contract where an untouched input
    /// arrives as `""`.
    pub fn search(&self, author: Option<&str>, year: Option<&str>) -> Result<Vec<Record>> {
        let author = author.filter(|a| !a.is_empty());
        let year = year.filter(|y| !y.is_empty());

        if let Some(author) = author {
            return Ok(self
                .records
                .iter()
                .filter(|r| r.author == author)
                .cloned()
                .collect());
        }

        if let Some(raw) = year {
            let year = coerce_integer(Field::Year, raw)?;
            return Ok(self
                .records
                .iter()
                .filter(|r| r.year == year)
                .cloned()
                .collect());
        }

        Ok(Vec::new())
    }

    // =========================================================================
    // Aggregations
    // =========================================================================

    /// Sum of `copy_count` across all records; 0 for an empty catalog
    ///
    /// The sum saturates at the `i64` limits, so extreme counts give the
    /// same result in debug and release builds instead of panicking or
    /// wrapping.
    pub fn total_copies(&self) -> i64 {
        self.records
            .iter()
            .fold(0i64, |total, r| total.saturating_add(r.copy_count))
    }

    /// Records per distinct genre, descending by count
    ///
    /// Ties keep first-encountered order: the grouping pass walks the table
    /// in row order and the sort is stable.
    pub fn genre_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();

        for record in &self.records {
            match counts.iter_mut().find(|(genre, _)| *genre == record.genre) {
                Some((_, count)) => *count += 1,
                None => counts.push((record.genre.clone(), 1)),
            }
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    /// Data for the genre distribution chart
    ///
    /// Identical to [`Catalog::genre_counts`]; exposed separately so the
    /// rendering layer can feed it to any charting facility. An empty
    /// result means there is nothing to render, which is the renderer's
    /// call to surface.
    pub fn genre_distribution_data(&self) -> Vec<(String, usize)> {
        self.genre_counts()
    }

    /// Raw `year` values in row order, for external binning and rendering
    ///
    /// An empty result means there is nothing to render.
    pub fn year_histogram_data(&self) -> Vec<i64> {
        self.records.iter().map(|r| r.year).collect()
    }
}
