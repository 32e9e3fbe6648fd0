//! Manager Module
//!
//! The catalog data manager that coordinates all components.
//!
//! ## Responsibilities
//! - Own the in-memory [`Catalog`] and the [`CsvStore`]
//! - Coerce raw text inputs before any mutation
//! - Persist the full table after every mutating operation
//! - Re-point and reload the store on request
//!
//! Every public operation is a complete, synchronous transaction with no
//! intermediate observable state: inputs are coerced first (a coercion
//! failure leaves both memory and store untouched), then the in-memory
//! table is mutated, then the store is rewritten in full. A persist failure
//! after a successful mutation surfaces as an error rather than being
//! swallowed; nothing is retried.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use crate::record::{Field, Record};
use crate::store::CsvStore;

/// The catalog data manager
///
/// Single-threaded: the manager exclusively owns the catalog and is
/// driven by one caller (the presentation layer), so no locking exists
/// anywhere. The store file is assumed to have exactly one writer, this
/// process.
pub struct CatalogManager {
    /// Manager configuration
    config: Config,

    /// Persistent CSV store
    store: CsvStore,

    /// In-memory record table
    catalog: Catalog,
}

impl CatalogManager {
    /// Open a manager with the given config
    ///
    /// On startup:
    /// 1. Bind the store to the configured path
    /// 2. Load the full table (missing file → empty catalog with a warning)
    /// 3. Ready to serve operations
    pub fn open(config: Config) -> Result<Self> {
        let store = CsvStore::new(&config.store_path);
        let records = store.load()?;

        debug!(
            path = %config.store_path.display(),
            count = records.len(),
            "catalog loaded"
        );

        Ok(Self {
            config,
            store,
            catalog: Catalog::from_records(records),
        })
    }

    /// Open with a store path (convenience method)
    ///
    /// Uses default config with the specified store file
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().store_path(path).build();
        Self::open(config)
    }

    // =========================================================================
    // Mutating Operations (each ends in a full rewrite of the store)
    // =========================================================================

    /// Add a record from raw text inputs
    ///
    /// Steps:
    /// 1. Coerce `year` and `copy_count` to integers
    ///    ([`TypeCoercion`](crate::ShelfError::TypeCoercion) aborts before
    ///    anything is mutated or written)
    /// 2. Append the record (duplicate titles allowed)
    /// 3. Persist the full table
    pub fn add_record(
        &mut self,
        title: &str,
        author: &str,
        year: &str,
        genre: &str,
        copy_count: &str,
    ) -> Result<()> {
        let record = Record::from_fields(title, author, year, genre, copy_count)?;

        self.catalog.add(record);
        self.persist()?;

        debug!(%title, "record added");
        Ok(())
    }

    /// Edit one field of the first record whose title matches
    ///
    /// `field_name` must be one of the five column names
    /// ([`UnknownField`](crate::ShelfError::UnknownField) otherwise) and
    /// `new_value` is coerced for that field before anything happens.
    ///
    /// Returns whether a record was edited. A missing title is a soft
    /// no-op, but the store is still rewritten, matching the historical
    /// persist-on-every-call behavior of this operation.
    pub fn edit_record(&mut self, title: &str, field_name: &str, new_value: &str) -> Result<bool> {
        let field: Field = field_name.parse()?;
        let value = field.coerce(new_value)?;

        let edited = self.catalog.edit(title, field, value)?;
        self.persist()?;

        if edited {
            debug!(%title, %field, "record updated");
        } else {
            debug!(%title, "edit target not found; table unchanged");
        }
        Ok(edited)
    }

    /// Delete **all** records whose title matches exactly
    ///
    /// Returns the number of records removed (0 = soft no-op). The store is
    /// rewritten even when nothing matched, same as
    /// [`edit_record`](CatalogManager::edit_record).
    pub fn delete_record(&mut self, title: &str) -> Result<usize> {
        let removed = self.catalog.delete(title);
        self.persist()?;

        debug!(%title, removed, "delete completed");
        Ok(removed)
    }

    // =========================================================================
    // Read-only Operations (no persist)
    // =========================================================================

    /// The current table in row order
    pub fn list(&self) -> &[Record] {
        self.catalog.records()
    }

    /// Search by author or publication year; see [`Catalog::search`]
    pub fn search(&self, author: Option<&str>, year: Option<&str>) -> Result<Vec<Record>> {
        self.catalog.search(author, year)
    }

    /// Sum of `copy_count` across all records
    pub fn total_copies(&self) -> i64 {
        self.catalog.total_copies()
    }

    /// Records per distinct genre, descending by count
    pub fn genre_counts(&self) -> Vec<(String, usize)> {
        self.catalog.genre_counts()
    }

    /// Data for the genre distribution chart; see
    /// [`Catalog::genre_distribution_data`]
    pub fn genre_distribution_data(&self) -> Vec<(String, usize)> {
        self.catalog.genre_distribution_data()
    }

    /// Raw year values for external binning; see
    /// [`Catalog::year_histogram_data`]
    pub fn year_histogram_data(&self) -> Vec<i64> {
        self.catalog.year_histogram_data()
    }

    // =========================================================================
    // Store Control
    // =========================================================================

    /// Re-point the store at a different file and reload the catalog
    ///
    /// The same missing-file fallback as [`open`](CatalogManager::open) applies:
    /// an absent file loads as an empty catalog. The previous in-memory
    /// table is discarded, not merged.
    pub fn reload_from(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        self.store.retarget(&path);
        self.config.store_path = path;

        let records = self.store.load()?;
        debug!(
            path = %self.config.store_path.display(),
            count = records.len(),
            "catalog reloaded"
        );

        self.catalog = Catalog::from_records(records);
        Ok(())
    }

    /// Rewrite the store with the current in-memory table
    ///
    /// This is the single persistence step every mutating operation funnels
    /// through.
    pub fn persist(&self) -> Result<()> {
        self.store.save(self.catalog.records())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The current store file path
    pub fn store_path(&self) -> &Path {
        self.store.path()
    }

    /// Number of records currently in the catalog
    pub fn record_count(&self) -> usize {
        self.catalog.len()
    }

    /// Read access to the in-memory catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
