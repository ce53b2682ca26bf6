//! The seam between generated SQL and whatever runs it.

use serde_json::Value;

use crate::error::Result;

/// What kind of statement is being executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// `INSERT`.
    Insert,
    /// `UPDATE`.
    Update,
    /// `DELETE`.
    Delete,
    /// Anything else (DDL, raw SQL).
    Raw,
}

/// Result of executing one statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOutput {
    /// Returned rows, in whatever shape the executor produces.
    pub rows: Vec<Value>,
    /// Number of rows touched.
    pub affected_rows: u64,
}

/// Executes SQL text produced by the lifecycle operations.
///
/// Implementations own the connection. Statements arrive fully rendered,
/// with literal values and no bind parameters.
#[allow(async_fn_in_trait)]
pub trait QueryExecutor {
    /// Runs `sql` and reports its output.
    async fn query_raw(&self, sql: &str, kind: QueryKind) -> Result<QueryOutput>;
}
