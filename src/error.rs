//! Error types for ShelfDB
//!
//! Provides a unified error type for all operations.
//!
//! Two failure classes are deliberately *not* errors: a missing store file at
//! load time (recovered locally to an empty catalog) and an edit/delete whose
//! target title does not exist (reported as a soft no-op outcome by the
//! operation's return value).

use thiserror::Error;

use crate::record::Field;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Unified error type for ShelfDB operations
#[derive(Debug, Error)]
pub enum ShelfError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("store error: {0}")]
    Csv(#[from] csv::Error),

    // -------------------------------------------------------------------------
    // Input Coercion Errors
    // -------------------------------------------------------------------------
    #[error("invalid value '{value}' for field '{field}'")]
    TypeCoercion { field: Field, value: String },

    #[error("unknown field: '{0}'")]
    UnknownField(String),
}
