//! SQL generation over a dialect descriptor.
//!
//! [`QueryGenerator`] is bound to one [`Dialect`] and a mutable database
//! version. Rendering a table is two-staged: [`QueryGenerator::attributes_to_sql`]
//! turns column definitions into per-column fragments, then
//! [`QueryGenerator::create_table_query`] assembles them into a statement.
//!
//! # Example
//!
//! ```rust
//! use oxide_ddl_core::{Dialect, QueryGenerator, TableDefinition, enumeration};
//!
//! let table = TableDefinition::builder("users")
//!     .schema("foo")
//!     .column(enumeration("mood", ["happy", "sad"]).build())
//!     .timestamps(false)
//!     .build();
//!
//! let generator = QueryGenerator::new(Dialect::Mysql);
//! let columns = generator.attributes_to_sql(&table).unwrap();
//! let sql = generator.create_table_query(table.table_ref(), &columns, &Default::default());
//!
//! assert_eq!(
//!     sql,
//!     "CREATE TABLE IF NOT EXISTS `foo`.`users` (`id` INTEGER NOT NULL auto_increment , \
//!      `mood` ENUM('happy', 'sad'), PRIMARY KEY (`id`)) ENGINE=InnoDB;"
//! );
//! ```

mod attributes;
mod create_table;
mod dml;
mod enums;

use tracing::warn;

use crate::config::GeneratorConfig;
use crate::dialect::{Dialect, DialectDescriptor, SchemaQualification, StringEscape};
use crate::error::Result;
use crate::schema::{Literal, TableRef};
use crate::version::DatabaseVersion;

pub use create_table::{CreateTableOptions, DropTableOptions, UniqueKey};

/// Ordered column name to column fragment mapping.
///
/// Produced by [`QueryGenerator::attributes_to_sql`] and consumed by
/// [`QueryGenerator::create_table_query`]. Iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnFragments {
    entries: Vec<(String, String)>,
}

impl ColumnFragments {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a fragment, replacing an existing one for the same column in place.
    pub fn insert(&mut self, name: impl Into<String>, fragment: impl Into<String>) {
        let name = name.into();
        let fragment = fragment.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = fragment,
            None => self.entries.push((name, fragment)),
        }
    }

    /// Returns the fragment for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f.as_str())
    }

    /// Iterates `(name, fragment)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, f)| (n.as_str(), f.as_str()))
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, F: Into<String>> FromIterator<(N, F)> for ColumnFragments {
    fn from_iter<I: IntoIterator<Item = (N, F)>>(iter: I) -> Self {
        let mut fragments = Self::new();
        for (name, fragment) in iter {
            fragments.insert(name, fragment);
        }
        fragments
    }
}

/// Generates SQL text for one dialect.
///
/// The generator holds no connection and performs no IO. It is cheap to
/// clone and safe to share; the database version is read on every call so
/// changing it affects subsequent statements only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryGenerator {
    dialect: Dialect,
    database_version: DatabaseVersion,
}

impl QueryGenerator {
    /// Creates a generator with an unknown database version.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            database_version: DatabaseVersion::Unknown,
        }
    }

    /// Creates a generator from a configuration record.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::UnsupportedDialect`](crate::DdlError::UnsupportedDialect)
    /// if the configured dialect is not recognised.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        let dialect = config.dialect.parse()?;
        Ok(Self::new(dialect).with_database_version(config.database_version.clone()))
    }

    /// Sets the database version.
    #[must_use]
    pub fn with_database_version(mut self, version: impl Into<DatabaseVersion>) -> Self {
        self.database_version = version.into();
        self
    }

    /// Replaces the database version for subsequent calls.
    pub fn set_database_version(&mut self, version: impl Into<DatabaseVersion>) {
        self.database_version = version.into();
    }

    /// Returns the database version.
    #[must_use]
    pub const fn database_version(&self) -> &DatabaseVersion {
        &self.database_version
    }

    /// Returns the dialect.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Returns the dialect's capability record.
    #[must_use]
    pub fn descriptor(&self) -> &'static DialectDescriptor {
        self.dialect.descriptor()
    }

    /// Quotes a single identifier, doubling any embedded closing delimiter.
    #[must_use]
    pub fn quote_identifier(&self, identifier: &str) -> String {
        let (open, close) = self.descriptor().quotes;
        let mut quoted = String::with_capacity(identifier.len() + 2);
        quoted.push(open);
        for ch in identifier.chars() {
            if ch == close {
                quoted.push(close);
            }
            quoted.push(ch);
        }
        quoted.push(close);
        quoted
    }

    /// Quotes a possibly schema-qualified table name.
    #[must_use]
    pub fn quote_table(&self, table: &TableRef) -> String {
        match (&table.schema, self.descriptor().schema_qualification) {
            (None, _) => self.quote_identifier(&table.name),
            (Some(schema), SchemaQualification::Separate) => format!(
                "{}.{}",
                self.quote_identifier(schema),
                self.quote_identifier(&table.name)
            ),
            (Some(schema), SchemaQualification::Joined) => {
                self.quote_identifier(&format!("{schema}.{}", table.name))
            }
        }
    }

    /// Renders a literal for direct embedding in SQL.
    ///
    /// SQL has no literal for NaN or infinity, so non-finite floats render
    /// as `NULL`.
    #[must_use]
    pub fn escape(&self, value: &Literal) -> String {
        let descriptor = self.descriptor();
        match value {
            Literal::Null => "NULL".to_string(),
            Literal::Bool(true) => descriptor.boolean_literals.0.to_string(),
            Literal::Bool(false) => descriptor.boolean_literals.1.to_string(),
            Literal::Integer(n) => n.to_string(),
            Literal::Float(f) if f.is_finite() => f.to_string(),
            Literal::Float(f) => {
                warn!(dialect = %self.dialect, value = %f, "Non-finite float rendered as NULL");
                "NULL".to_string()
            }
            Literal::Text(s) => self.escape_str(s),
        }
    }

    fn escape_str(&self, value: &str) -> String {
        let descriptor = self.descriptor();
        let escaped = match descriptor.string_escape {
            StringEscape::DoubledQuote => value.replace('\'', "''"),
            StringEscape::Backslash => value.replace('\\', "\\\\").replace('\'', "\\'"),
        };
        format!("{}'{escaped}'", descriptor.string_prefix)
    }
}
