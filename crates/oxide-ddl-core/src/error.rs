//! Error types for DDL generation.

use std::path::PathBuf;

/// Errors raised while configuring a generator or rendering SQL.
#[derive(Debug, thiserror::Error)]
pub enum DdlError {
    /// The dialect name is not one of the supported backends.
    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(String),

    /// A database version string could not be interpreted.
    #[error("Invalid database version '{raw}': {message}")]
    InvalidVersion {
        /// The version as supplied by the caller.
        raw: String,
        /// Why it was rejected.
        message: String,
    },

    /// An enum column was declared without any values.
    #[error("Values for ENUM haven't been defined (column '{column}')")]
    EmptyEnum {
        /// Name of the offending column.
        column: String,
    },

    /// The operation has no equivalent in the selected dialect.
    #[error("{operation} is not supported by the {dialect} dialect")]
    Unsupported {
        /// The requested operation.
        operation: &'static str,
        /// The dialect it was requested for.
        dialect: &'static str,
    },

    /// A configuration file could not be read.
    #[error("Failed to read configuration '{path}': {source}")]
    Config {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for DDL operations.
pub type Result<T> = std::result::Result<T, DdlError>;
