//! Table definitions.
//!
//! Building a table normalizes it the way models are normalized: a missing
//! primary key becomes an auto-increment `id`, and timestamp columns are
//! appended when enabled.

use serde::{Deserialize, Serialize};

use super::TableRef;
use super::column::{ColumnDefinition, DataType, integer};

/// Table-level options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Adds `createdAt` / `updatedAt` columns.
    pub timestamps: bool,
    /// Adds a nullable `deletedAt` column for soft deletes. Needs `timestamps`.
    pub paranoid: bool,
    /// Uses snake_case names for the timestamp columns.
    pub underscored: bool,
    /// Storage engine override (mysql/mariadb).
    pub engine: Option<String>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            timestamps: true,
            paranoid: false,
            underscored: false,
            engine: None,
        }
    }
}

/// A normalized table: qualified name, ordered columns and options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTableDefinition")]
pub struct TableDefinition {
    #[serde(flatten)]
    table: TableRef,
    columns: Vec<ColumnDefinition>,
    options: TableOptions,
}

#[derive(Deserialize)]
struct RawTableDefinition {
    #[serde(flatten)]
    table: TableRef,
    #[serde(default)]
    columns: Vec<ColumnDefinition>,
    #[serde(default)]
    options: TableOptions,
}

impl From<RawTableDefinition> for TableDefinition {
    fn from(raw: RawTableDefinition) -> Self {
        Self::normalized(raw.table, raw.columns, raw.options)
    }
}

impl TableDefinition {
    /// Starts building a table.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> TableBuilder {
        TableBuilder::new(name)
    }

    fn normalized(table: TableRef, mut columns: Vec<ColumnDefinition>, options: TableOptions) -> Self {
        if !columns.iter().any(|c| c.primary_key) {
            columns.insert(0, integer("id").not_null().primary_key().auto_increment().build());
        }

        let mut definition = Self {
            table,
            columns,
            options,
        };

        let timestamp_columns: Vec<(String, bool)> = [
            (definition.created_at(), false),
            (definition.updated_at(), false),
            (definition.deleted_at(), true),
        ]
        .into_iter()
        .filter_map(|(name, nullable)| name.map(|n| (n.to_string(), nullable)))
        .collect();

        for (name, nullable) in timestamp_columns {
            if definition.column(&name).is_none() {
                let mut column = ColumnDefinition::new(name, DataType::Date);
                column.allow_null = Some(nullable);
                definition.columns.push(column);
            }
        }

        definition
    }

    /// Returns the qualified table reference.
    #[must_use]
    pub const fn table_ref(&self) -> &TableRef {
        &self.table
    }

    /// Returns the unqualified table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.table.name
    }

    /// Returns the columns in definition order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// Looks up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the primary key column names in definition order.
    #[must_use]
    pub fn primary_keys(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.primary_key)
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Name of the creation timestamp column, if timestamps are enabled.
    #[must_use]
    pub fn created_at(&self) -> Option<&'static str> {
        self.timestamp_name("createdAt", "created_at")
    }

    /// Name of the update timestamp column, if timestamps are enabled.
    #[must_use]
    pub fn updated_at(&self) -> Option<&'static str> {
        self.timestamp_name("updatedAt", "updated_at")
    }

    /// Name of the soft-delete column, if the table is paranoid.
    #[must_use]
    pub fn deleted_at(&self) -> Option<&'static str> {
        if self.options.paranoid {
            self.timestamp_name("deletedAt", "deleted_at")
        } else {
            None
        }
    }

    fn timestamp_name(&self, camel: &'static str, snake: &'static str) -> Option<&'static str> {
        if !self.options.timestamps {
            return None;
        }
        Some(if self.options.underscored { snake } else { camel })
    }
}

/// Builder for [`TableDefinition`].
#[derive(Debug, Clone)]
pub struct TableBuilder {
    table: TableRef,
    columns: Vec<ColumnDefinition>,
    options: TableOptions,
}

impl TableBuilder {
    /// Starts a table in the default schema.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: TableRef::new(name),
            columns: Vec::new(),
            options: TableOptions::default(),
        }
    }

    /// Places the table in a schema.
    #[must_use]
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.table.schema = Some(schema.into());
        self
    }

    /// Appends a column.
    #[must_use]
    pub fn column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    /// Enables or disables the timestamp columns (enabled by default).
    #[must_use]
    pub const fn timestamps(mut self, enabled: bool) -> Self {
        self.options.timestamps = enabled;
        self
    }

    /// Enables soft deletes.
    #[must_use]
    pub const fn paranoid(mut self, enabled: bool) -> Self {
        self.options.paranoid = enabled;
        self
    }

    /// Uses snake_case timestamp column names.
    #[must_use]
    pub const fn underscored(mut self, enabled: bool) -> Self {
        self.options.underscored = enabled;
        self
    }

    /// Overrides the storage engine.
    #[must_use]
    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.options.engine = Some(engine.into());
        self
    }

    /// Normalizes and returns the table.
    #[must_use]
    pub fn build(self) -> TableDefinition {
        TableDefinition::normalized(self.table, self.columns, self.options)
    }
}
