//! Record definitions
//!
//! Defines the fixed five-field shape of a catalog entry, the closed
//! [`Field`] enumeration used to address fields by name, and the coercion
//! rules that turn raw text-box-style inputs into typed values.
//!
//! The struct field order is the canonical column order of the store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShelfError};

/// A single catalog entry.
///
/// `title` acts as a natural key for edit/delete lookups, but uniqueness is
/// not enforced: duplicate titles may be inserted, edits address the first
/// match and deletes remove every match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Book title (lookup key for edit/delete)
    pub title: String,

    /// Author, free text (exact-match search criterion)
    pub author: String,

    /// Publication year; coerced from input, no range validation
    pub year: i64,

    /// Genre, free text (grouping key for the distribution chart)
    pub genre: String,

    /// Number of copies held; coerced from input, no non-negativity check
    pub copy_count: i64,
}

impl Record {
    /// Create a record from already-typed values
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
        genre: impl Into<String>,
        copy_count: i64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            copy_count,
        }
    }

    /// Build a record from raw text inputs, coercing the numeric fields
    ///
    /// `year` and `copy_count` must parse as integers (surrounding whitespace
    /// is tolerated); anything else fails with
    /// [`ShelfError::TypeCoercion`] and nothing is constructed.
    pub fn from_fields(
        title: &str,
        author: &str,
        year: &str,
        genre: &str,
        copy_count: &str,
    ) -> Result<Self> {
        Ok(Self {
            title: title.to_string(),
            author: author.to_string(),
            year: coerce_integer(Field::Year, year)?,
            genre: genre.to_string(),
            copy_count: coerce_integer(Field::CopyCount, copy_count)?,
        })
    }

    /// Overwrite one field with a typed value
    ///
    /// The value's shape must match the field (text fields take
    /// [`FieldValue::Text`], integer fields [`FieldValue::Integer`]); a
    /// mismatch fails with [`ShelfError::TypeCoercion`] and leaves the
    /// record untouched.
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<()> {
        match (field, value) {
            (Field::Title, FieldValue::Text(text)) => self.title = text,
            (Field::Author, FieldValue::Text(text)) => self.author = text,
            (Field::Genre, FieldValue::Text(text)) => self.genre = text,
            (Field::Year, FieldValue::Integer(n)) => self.year = n,
            (Field::CopyCount, FieldValue::Integer(n)) => self.copy_count = n,
            (field, value) => {
                return Err(ShelfError::TypeCoercion {
                    field,
                    value: value.to_string(),
                })
            }
        }
        Ok(())
    }
}

// =============================================================================
// Field Enumeration
// =============================================================================

/// The closed set of record fields addressable by name
///
/// Edit operations must name one of these; anything else is rejected with
/// [`ShelfError::UnknownField`] rather than silently growing the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Year,
    Genre,
    CopyCount,
}

impl Field {
    /// All fields in canonical column order
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Author,
        Field::Year,
        Field::Genre,
        Field::CopyCount,
    ];

    /// The field's column name in the store
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Year => "year",
            Field::Genre => "genre",
            Field::CopyCount => "copy_count",
        }
    }

    /// Whether this field holds an integer (as opposed to free text)
    pub fn is_integer(&self) -> bool {
        matches!(self, Field::Year | Field::CopyCount)
    }

    /// Coerce a raw text input into this field's typed value
    ///
    /// Text fields pass the input through unchanged. Integer fields trim
    /// surrounding whitespace and parse as `i64`, failing with
    /// [`ShelfError::TypeCoercion`] on non-numeric input.
    pub fn coerce(self, raw: &str) -> Result<FieldValue> {
        if self.is_integer() {
            coerce_integer(self, raw).map(FieldValue::Integer)
        } else {
            Ok(FieldValue::Text(raw.to_string()))
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ShelfError;

    /// Parse a column name (case-insensitive) into a field
    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "title" => Ok(Field::Title),
            "author" => Ok(Field::Author),
            "year" => Ok(Field::Year),
            "genre" => Ok(Field::Genre),
            "copy_count" => Ok(Field::CopyCount),
            _ => Err(ShelfError::UnknownField(name.to_string())),
        }
    }
}

// =============================================================================
// Field Values
// =============================================================================

/// A typed value for exactly one record field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Value for a text field (`title`, `author`, `genre`)
    Text(String),

    /// Value for an integer field (`year`, `copy_count`)
    Integer(i64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Integer(n) => write!(f, "{}", n),
        }
    }
}

/// Parse a raw input as an integer for the given field
///
/// Surrounding whitespace is tolerated, matching what users paste into a
/// form; `"2001"` and `" 2001 "` both coerce to `2001`.
pub(crate) fn coerce_integer(field: Field, raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| ShelfError::TypeCoercion {
            field,
            value: raw.to_string(),
        })
}
