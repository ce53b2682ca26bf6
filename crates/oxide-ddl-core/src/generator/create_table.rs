//! `CREATE TABLE` / `DROP TABLE` assembly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ColumnFragments, QueryGenerator};
use crate::dialect::{
    ConstraintPlacement, DialectDescriptor, EnumStrategy, ExistenceGuard, StringEscape,
    TableCommentStyle,
};
use crate::error::Result;
use crate::schema::{DataType, TableDefinition, TableRef};
use crate::version::supports_if_not_exists;

/// A table-level unique constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueKey {
    /// Constraint name; unnamed when absent.
    #[serde(default)]
    pub name: Option<String>,
    /// Columns covered by the constraint, in order.
    pub columns: Vec<String>,
}

impl UniqueKey {
    /// An unnamed unique constraint over `columns`.
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Names the constraint.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Table-level options for `CREATE TABLE`.
///
/// Storage options (`engine`, `charset`, `collate`,
/// `initial_auto_increment`, `row_format`) only apply to the MySQL family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateTableOptions {
    /// Unique constraints appended after the columns.
    pub unique_keys: Vec<UniqueKey>,
    /// Storage engine; the dialect default when absent.
    pub engine: Option<String>,
    /// Table comment.
    pub comment: Option<String>,
    /// Default character set.
    pub charset: Option<String>,
    /// Default collation.
    pub collate: Option<String>,
    /// Starting value of the auto-increment counter.
    pub initial_auto_increment: Option<u64>,
    /// Row format.
    pub row_format: Option<String>,
}

/// Options for `DROP TABLE`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropTableOptions {
    /// Drop dependent objects too, where the dialect supports it.
    pub cascade: bool,
}

impl QueryGenerator {
    /// Assembles a `CREATE TABLE` statement from column fragments.
    ///
    /// Inline `PRIMARY KEY` markers are collected into a table-level
    /// clause (or normalized in place for sqlite), inline `REFERENCES`
    /// become `FOREIGN KEY` clauses where the dialect wants them trailing,
    /// and the statement is wrapped in the dialect's existence guard.
    #[must_use]
    pub fn create_table_query(
        &self,
        table: &TableRef,
        attributes: &ColumnFragments,
        options: &CreateTableOptions,
    ) -> String {
        let descriptor = self.descriptor();
        let fragments: Vec<(&str, Fragment)> = attributes
            .iter()
            .map(|(name, fragment)| (name, Fragment::new(fragment, descriptor)))
            .collect();
        let inline_primary_keys = fragments
            .iter()
            .filter(|(_, fragment)| fragment.contains("PRIMARY KEY"))
            .count();

        let mut columns = Vec::with_capacity(fragments.len());
        let mut primary_keys = Vec::new();
        let mut foreign_keys = Vec::new();

        for (name, mut data_type) in fragments {
            let quoted = self.quote_identifier(name);

            let reference = match descriptor.foreign_key_placement {
                ConstraintPlacement::Trailing => data_type
                    .find(" REFERENCES")
                    .map(|idx| data_type.split_off(idx).trim_start().to_string()),
                ConstraintPlacement::Inline => None,
            };

            if data_type.contains("PRIMARY KEY") {
                match descriptor.primary_key_placement {
                    ConstraintPlacement::Trailing => {
                        primary_keys.push(quoted.clone());
                        data_type.replace_first("PRIMARY KEY", "");
                    }
                    ConstraintPlacement::Inline if inline_primary_keys > 1 => {
                        primary_keys.push(quoted.clone());
                        data_type.replace_first(" AUTOINCREMENT", "");
                        if data_type.contains("NOT NULL") {
                            data_type.replace_first(" PRIMARY KEY", "");
                        } else {
                            data_type.replace_first("PRIMARY KEY", "NOT NULL");
                        }
                    }
                    ConstraintPlacement::Inline => {
                        if data_type.contains("INT") {
                            data_type = normalize_rowid_key(&data_type);
                        }
                    }
                }
            }

            if descriptor.serial_types && data_type.contains(" SERIAL") {
                serial_type(&mut data_type);
            }

            if descriptor.enum_strategy == EnumStrategy::NamedType {
                if let Some(end) = data_type.enum_literal_end() {
                    data_type = Fragment::new(
                        &format!(
                            "{}{}",
                            self.enum_type_name(table, name),
                            &data_type.text[end..]
                        ),
                        descriptor,
                    );
                }
            }

            columns.push(format!("{quoted} {}", data_type.text));

            if let Some(reference) = reference {
                foreign_keys.push(format!("FOREIGN KEY ({quoted}) {reference}"));
            }
        }

        let mut clause = columns.join(", ");

        for key in &options.unique_keys {
            let key_columns: Vec<String> =
                key.columns.iter().map(|c| self.quote_identifier(c)).collect();
            clause.push_str(", ");
            if let Some(name) = &key.name {
                clause.push_str("CONSTRAINT ");
                clause.push_str(&self.quote_identifier(name));
                clause.push(' ');
            }
            clause.push_str("UNIQUE (");
            clause.push_str(&key_columns.join(", "));
            clause.push(')');
        }

        if !primary_keys.is_empty() {
            clause.push_str(", PRIMARY KEY (");
            clause.push_str(&primary_keys.join(descriptor.primary_key_separator));
            clause.push(')');
        }

        for foreign_key in foreign_keys {
            clause.push_str(", ");
            clause.push_str(&foreign_key);
        }

        let quoted_table = self.quote_table(table);
        let definition = format!("{quoted_table} ({clause}){}", self.table_suffix(options));

        let sql = match descriptor.existence_guard {
            ExistenceGuard::IfNotExists => {
                let guard = if supports_if_not_exists(self.dialect, &self.database_version) {
                    "IF NOT EXISTS "
                } else {
                    ""
                };
                let trailer = match (&options.comment, descriptor.table_comments) {
                    (Some(comment), TableCommentStyle::CommentOn) => format!(
                        "; COMMENT ON TABLE {quoted_table} IS {}",
                        self.escape_str(comment)
                    ),
                    _ => String::new(),
                };
                format!("CREATE TABLE {guard}{definition}{trailer};")
            }
            ExistenceGuard::ObjectIdCheck => format!(
                "IF OBJECT_ID('{}', 'U') IS NULL CREATE TABLE {definition};",
                quoted_table.replace('\'', "''")
            ),
            ExistenceGuard::DuplicateObjectHandler => format!(
                "BEGIN\n    DECLARE CONTINUE HANDLER FOR SQLSTATE VALUE '42710'\n      BEGIN END;\n      CREATE TABLE {definition};\n      END"
            ),
        };

        debug!(dialect = %self.dialect, table = %table, sql = %sql, "Generated CREATE TABLE");
        sql
    }

    /// Renders every statement needed to create `table`.
    ///
    /// For dialects with named enum types the `CREATE TYPE` statements come
    /// first. The table's own storage engine is used unless `options`
    /// names one.
    ///
    /// # Errors
    ///
    /// Propagates column rendering errors such as
    /// [`DdlError::EmptyEnum`](crate::DdlError::EmptyEnum).
    pub fn create_table_statements(
        &self,
        table: &TableDefinition,
        options: &CreateTableOptions,
    ) -> Result<Vec<String>> {
        let attributes = self.attributes_to_sql(table)?;
        let mut statements = Vec::new();

        if self.descriptor().enum_strategy == EnumStrategy::NamedType {
            for column in table.columns() {
                if let DataType::Enum(values) = &column.data_type {
                    statements.push(self.create_enum_query(table.table_ref(), &column.name, values)?);
                }
            }
        }

        let mut options = options.clone();
        if options.engine.is_none() {
            options.engine.clone_from(&table.options().engine);
        }
        statements.push(self.create_table_query(table.table_ref(), &attributes, &options));
        Ok(statements)
    }

    /// Renders an idempotent `DROP TABLE` statement.
    #[must_use]
    pub fn drop_table_query(&self, table: &TableRef, options: &DropTableOptions) -> String {
        let descriptor = self.descriptor();
        let quoted_table = self.quote_table(table);

        match descriptor.existence_guard {
            ExistenceGuard::IfNotExists => {
                let cascade = if options.cascade && descriptor.supports_drop_cascade {
                    " CASCADE"
                } else {
                    ""
                };
                format!("DROP TABLE IF EXISTS {quoted_table}{cascade};")
            }
            ExistenceGuard::ObjectIdCheck => format!(
                "IF OBJECT_ID('{}', 'U') IS NOT NULL DROP TABLE {quoted_table};",
                quoted_table.replace('\'', "''")
            ),
            ExistenceGuard::DuplicateObjectHandler => format!(
                "BEGIN\n    DECLARE CONTINUE HANDLER FOR SQLSTATE VALUE '42704'\n      BEGIN END;\n      DROP TABLE {quoted_table};\n      END"
            ),
        }
    }

    fn table_suffix(&self, options: &CreateTableOptions) -> String {
        let descriptor = self.descriptor();
        let Some(default_engine) = descriptor.default_engine else {
            return String::new();
        };

        let mut suffix = format!(
            " ENGINE={}",
            options.engine.as_deref().unwrap_or(default_engine)
        );
        if let Some(comment) = options
            .comment
            .as_deref()
            .filter(|_| descriptor.table_comments == TableCommentStyle::TableOption)
        {
            suffix.push_str(" COMMENT ");
            suffix.push_str(&self.escape_str(comment));
        }
        if let Some(charset) = &options.charset {
            suffix.push_str(" DEFAULT CHARSET=");
            suffix.push_str(charset);
        }
        if let Some(collate) = &options.collate {
            suffix.push_str(" COLLATE ");
            suffix.push_str(collate);
        }
        if let Some(start) = options.initial_auto_increment {
            suffix.push_str(&format!(" AUTO_INCREMENT={start}"));
        }
        if let Some(row_format) = &options.row_format {
            suffix.push_str(" ROW_FORMAT=");
            suffix.push_str(row_format);
        }
        suffix
    }
}

/// A column fragment alongside a copy with every quoted literal and quoted
/// identifier blanked out. Keyword searches run against the blanked copy so
/// that a value such as `DEFAULT 'PRIMARY KEY'` never reads as structure.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fragment {
    text: String,
    masked: String,
}

impl Fragment {
    fn new(text: &str, descriptor: &DialectDescriptor) -> Self {
        Self {
            text: text.to_string(),
            masked: mask_quoted(text, descriptor),
        }
    }

    fn contains(&self, keyword: &str) -> bool {
        self.masked.contains(keyword)
    }

    fn find(&self, keyword: &str) -> Option<usize> {
        self.masked.find(keyword)
    }

    /// Replaces the first unquoted `keyword`.
    fn replace_first(&mut self, keyword: &str, replacement: &str) {
        if let Some(idx) = self.find(keyword) {
            let range = idx..idx + keyword.len();
            self.text.replace_range(range.clone(), replacement);
            self.masked.replace_range(range, replacement);
        }
    }

    /// Cuts the fragment at `at`, returning the tail text.
    fn split_off(&mut self, at: usize) -> String {
        self.masked.truncate(at);
        self.text.split_off(at)
    }

    /// Byte offset just past the `)` closing a leading `ENUM(...)`.
    fn enum_literal_end(&self) -> Option<usize> {
        if !self.text.starts_with("ENUM(") {
            return None;
        }
        self.masked.find(')').map(|idx| idx + 1)
    }
}

const MASK: char = '#';

/// Blanks out single-quoted literals and delimited identifiers, byte for
/// byte, leaving SQL keywords at their original offsets.
fn mask_quoted(text: &str, descriptor: &DialectDescriptor) -> String {
    let (open, close) = descriptor.quotes;
    let mut masked = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        let terminator = match ch {
            '\'' => '\'',
            c if c == open => close,
            _ => {
                masked.push(ch);
                continue;
            }
        };

        blank(&mut masked, ch);
        while let Some(inner) = chars.next() {
            blank(&mut masked, inner);
            if terminator == '\''
                && inner == '\\'
                && descriptor.string_escape == StringEscape::Backslash
            {
                if let Some(escaped) = chars.next() {
                    blank(&mut masked, escaped);
                }
            } else if inner == terminator {
                // A doubled delimiter stays inside the quoted span.
                match chars.next_if_eq(&terminator) {
                    Some(doubled) => blank(&mut masked, doubled),
                    None => break,
                }
            }
        }
    }
    masked
}

fn blank(masked: &mut String, ch: char) {
    for _ in 0..ch.len_utf8() {
        masked.push(MASK);
    }
}

/// sqlite only treats `INTEGER PRIMARY KEY` as a rowid alias.
fn normalize_rowid_key(data_type: &Fragment) -> Fragment {
    let mut normalized = Fragment {
        text: String::from("INTEGER PRIMARY KEY"),
        masked: String::from("INTEGER PRIMARY KEY"),
    };
    if data_type.contains(" AUTOINCREMENT") {
        normalized.text.push_str(" AUTOINCREMENT");
        normalized.masked.push_str(" AUTOINCREMENT");
    }
    if let Some(idx) = data_type.find(" REFERENCES") {
        normalized.text.push_str(&data_type.text[idx..]);
        normalized.masked.push_str(&data_type.masked[idx..]);
    }
    normalized
}

/// Folds `INTEGER ... SERIAL` into the matching serial pseudo-type.
fn serial_type(data_type: &mut Fragment) {
    if data_type.contains("BIGINT") {
        data_type.replace_first("SERIAL", "BIGSERIAL");
        data_type.replace_first("BIGINT", "");
    } else if data_type.contains("SMALLINT") {
        data_type.replace_first("SERIAL", "SMALLSERIAL");
        data_type.replace_first("SMALLINT", "");
    } else {
        data_type.replace_first("INTEGER", "");
    }
    data_type.replace_first("NOT NULL", "");
}
