//! Dialect-neutral description of tables and columns.
//!
//! The generator consumes these types; nothing here knows about quoting or
//! any particular database.

mod column;
mod table;

use serde::{Deserialize, Serialize};

pub use column::{
    ColumnBuilder, ColumnDefinition, DataType, DefaultValue, ForeignKeyRef, IdentityOptions,
    Literal, ReferentialAction, bigint, boolean, date, enumeration, integer, string, text,
};
pub use table::{TableBuilder, TableDefinition, TableOptions};

/// A table name with an optional schema (namespace).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableRef {
    /// Unqualified table name.
    pub name: String,
    /// Schema the table lives in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

impl TableRef {
    /// A table in the default schema.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
        }
    }

    /// Places the table in `schema`.
    #[must_use]
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

impl From<&str> for TableRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TableRef {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for TableRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{schema}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}
