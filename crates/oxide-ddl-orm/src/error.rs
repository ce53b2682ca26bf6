//! Error types for the model lifecycle.

use oxide_ddl_core::DdlError;
use thiserror::Error;

use crate::hooks::HookKind;

/// Lifecycle errors.
#[derive(Debug, Error)]
pub enum OrmError {
    /// Restore was called on a model without soft deletes.
    #[error("Model {model} is not paranoid")]
    NotParanoid {
        /// Model name.
        model: String,
    },

    /// A persisted instance has no value for a primary key column.
    #[error("Model {model} instance has no value for primary key {column}")]
    MissingPrimaryKey {
        /// Model name.
        model: String,
        /// Primary key column.
        column: String,
    },

    /// A lifecycle hook rejected the operation.
    #[error("{kind} hook failed: {message}")]
    Hook {
        /// The hook that failed.
        kind: HookKind,
        /// Reason given by the hook.
        message: String,
    },

    /// The executor failed to run a statement.
    #[error("query execution failed: {0}")]
    Execution(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// SQL generation failed.
    #[error(transparent)]
    Generator(#[from] DdlError),
}

impl OrmError {
    /// Wraps an executor error.
    pub fn execution(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Execution(error.into())
    }
}

/// Result type alias for lifecycle operations.
pub type Result<T> = std::result::Result<T, OrmError>;
