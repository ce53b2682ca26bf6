//! Generator configuration.
//!
//! A configuration names the dialect and, optionally, the database server
//! version. It can be built in code or loaded from a JSON file:
//!
//! ```json
//! { "dialect": "postgres", "database_version": "9.0.0" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DdlError, Result};
use crate::version::DatabaseVersion;

/// Settings used to construct a [`QueryGenerator`](crate::QueryGenerator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Dialect name. Validated when the generator is built.
    pub dialect: String,
    /// Database server version; unknown when absent.
    #[serde(default)]
    pub database_version: DatabaseVersion,
}

impl GeneratorConfig {
    /// A configuration for `dialect` with an unknown version.
    #[must_use]
    pub fn new(dialect: impl Into<String>) -> Self {
        Self {
            dialect: dialect.into(),
            database_version: DatabaseVersion::Unknown,
        }
    }

    /// Sets the database version.
    #[must_use]
    pub fn with_database_version(mut self, version: impl Into<DatabaseVersion>) -> Self {
        self.database_version = version.into();
        self
    }

    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::Serialization`] for malformed JSON and
    /// [`DdlError::InvalidVersion`] (wrapped) for unparseable versions.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::Config`] if the file cannot be read, otherwise
    /// the errors of [`GeneratorConfig::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DdlError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
