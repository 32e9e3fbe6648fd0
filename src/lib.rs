//! # ShelfDB
//!
//! A single-user personal library catalog with:
//! - A flat CSV file as the persistent store
//! - Full-table load on open, full-table rewrite after every mutation
//! - Add/edit/delete/list/search operations over an in-memory record table
//! - Aggregations for chart rendering (genre distribution, year histogram)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Presentation Layer                         │
//! │          (interactive shell: prompts, tables, charts)        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ raw text inputs
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   CatalogManager                             │
//! │             (coerce → mutate → persist)                      │
//! └──────────┬──────────────────────────────┬───────────────────┘
//!            │                              │
//!            ▼                              ▼
//!     ┌─────────────┐               ┌─────────────┐
//!     │   Catalog   │               │  CsvStore   │
//!     │ (in memory) │               │   (disk)    │
//!     └─────────────┘               └─────────────┘
//! ```
//!
//! The [`Catalog`] holds the record table and all query/mutation semantics
//! with no I/O; the [`CsvStore`] owns the flat-file format; the
//! [`CatalogManager`] ties them together so that every mutating operation is
//! a complete synchronous transaction ending in a full rewrite of the store.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod catalog;
pub mod store;
pub mod manager;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, ShelfError};
pub use config::Config;
pub use record::{Field, FieldValue, Record};
pub use catalog::Catalog;
pub use store::CsvStore;
pub use manager::CatalogManager;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ShelfDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
