//! Configuration for ShelfDB
//!
//! Centralized configuration with sensible defaults. The catalog is a
//! single-user system, so the only tunable is where the store lives; the
//! presentation layer may re-point it at runtime through
//! [`CatalogManager::reload_from`](crate::CatalogManager::reload_from).

use std::path::PathBuf;

/// Main configuration for a ShelfDB instance
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the CSV store file holding the full catalog. The file does
    /// not have to exist yet; a missing store loads as an empty catalog and
    /// is created on the first persisted mutation.
    pub store_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("books.csv"),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the store file path
    pub fn store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.store_path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
