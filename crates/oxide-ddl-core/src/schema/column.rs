//! Column definitions and their fluent builder.
//!
//! A [`ColumnDefinition`] is dialect-neutral: it records what the caller
//! asked for (type, nullability, identity, references) and leaves every
//! syntax decision to the generator.

use serde::{Deserialize, Serialize};

use super::TableRef;

/// Logical column types, rendered per dialect by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    BigInt,
    /// 16-bit integer.
    SmallInt,
    /// Single precision float.
    Float,
    /// Double precision float.
    Double,
    /// Fixed-point decimal.
    Decimal {
        /// Total number of digits.
        precision: u16,
        /// Digits after the decimal point.
        scale: u16,
    },
    /// Variable-length string with a maximum length.
    String(u32),
    /// Fixed-length string.
    Char(u32),
    /// Unbounded text.
    Text,
    /// Boolean.
    Boolean,
    /// Date and time.
    Date,
    /// Date without time.
    DateOnly,
    /// Time without date.
    Time,
    /// UUID.
    Uuid,
    /// JSON document.
    Json,
    /// Binary large object.
    Blob,
    /// Enumeration of string values.
    Enum(Vec<String>),
}

impl DataType {
    /// Variable-length string with the conventional 255 length.
    #[must_use]
    pub const fn string() -> Self {
        Self::String(255)
    }

    /// Enumeration built from any list of string-like values.
    #[must_use]
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum(values.into_iter().map(Into::into).collect())
    }

    /// Returns `true` for the integer family.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer | Self::BigInt | Self::SmallInt)
    }
}

/// A literal value embedded directly into generated SQL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    /// SQL NULL.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Integer(i64),
    /// Float.
    Float(f64),
    /// String, escaped per dialect.
    Text(String),
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Default value for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValue {
    /// A literal, escaped for the dialect.
    Value(Literal),
    /// Raw SQL expression (e.g. `CURRENT_TIMESTAMP`).
    Expression(String),
    /// Filled in by the application at insert time; never part of DDL.
    Now,
}

impl DefaultValue {
    /// Whether the default can be expressed in a `DEFAULT` clause.
    #[must_use]
    pub const fn is_schemable(&self) -> bool {
        !matches!(self, Self::Now)
    }
}

/// Referential action for `ON DELETE` / `ON UPDATE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferentialAction {
    /// Propagate the change.
    Cascade,
    /// Reject the change.
    Restrict,
    /// Set the referencing column to NULL.
    SetNull,
    /// Set the referencing column to its default.
    SetDefault,
    /// Defer the check to the end of the statement.
    NoAction,
}

impl ReferentialAction {
    /// Returns the SQL keyword(s) for this action.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Cascade => "CASCADE",
            Self::Restrict => "RESTRICT",
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
            Self::NoAction => "NO ACTION",
        }
    }
}

/// A foreign key reference from one column to a column of another table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyRef {
    /// The referenced table.
    pub table: TableRef,
    /// The referenced column.
    #[serde(default = "default_reference_column")]
    pub column: String,
    /// Action on delete.
    #[serde(default)]
    pub on_delete: Option<ReferentialAction>,
    /// Action on update.
    #[serde(default)]
    pub on_update: Option<ReferentialAction>,
}

fn default_reference_column() -> String {
    String::from("id")
}

impl ForeignKeyRef {
    /// References the `id` column of `table`.
    #[must_use]
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            table: table.into(),
            column: default_reference_column(),
            on_delete: None,
            on_update: None,
        }
    }

    /// Sets the referenced column.
    #[must_use]
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    /// Sets the `ON DELETE` action.
    #[must_use]
    pub const fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = Some(action);
        self
    }

    /// Sets the `ON UPDATE` action.
    #[must_use]
    pub const fn on_update(mut self, action: ReferentialAction) -> Self {
        self.on_update = Some(action);
        self
    }
}

/// Start and step of an identity column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityOptions {
    /// First generated value.
    pub start: i64,
    /// Step between generated values.
    pub increment: i64,
}

impl Default for IdentityOptions {
    fn default() -> Self {
        Self {
            start: 1,
            increment: 1,
        }
    }
}

/// A complete, dialect-neutral column definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column name.
    pub name: String,
    /// Logical type.
    #[serde(rename = "type")]
    pub data_type: DataType,
    /// Explicit nullability; `None` when the caller did not say.
    #[serde(default)]
    pub allow_null: Option<bool>,
    /// Whether the column is part of the primary key.
    #[serde(default)]
    pub primary_key: bool,
    /// Whether values are generated by the database.
    #[serde(default)]
    pub auto_increment: bool,
    /// Identity start/step, used when `auto_increment` is set.
    #[serde(default)]
    pub identity: IdentityOptions,
    /// Whether the column carries a UNIQUE constraint.
    #[serde(default)]
    pub unique: bool,
    /// Default value.
    #[serde(default)]
    pub default: Option<DefaultValue>,
    /// Column comment (only some dialects render it inline).
    #[serde(default)]
    pub comment: Option<String>,
    /// Foreign key reference.
    #[serde(default)]
    pub references: Option<ForeignKeyRef>,
}

impl ColumnDefinition {
    /// Creates a nullable-by-default column with no constraints.
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            allow_null: None,
            primary_key: false,
            auto_increment: false,
            identity: IdentityOptions::default(),
            unique: false,
            default: None,
            comment: None,
            references: None,
        }
    }

    /// Returns `true` if the column was explicitly declared NOT NULL.
    #[must_use]
    pub fn is_not_null(&self) -> bool {
        self.allow_null == Some(false)
    }
}

/// Fluent builder for [`ColumnDefinition`].
#[derive(Debug, Clone)]
pub struct ColumnBuilder {
    column: ColumnDefinition,
}

impl ColumnBuilder {
    /// Starts a column with a name and type.
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            column: ColumnDefinition::new(name, data_type),
        }
    }

    /// Marks the column as NOT NULL.
    #[must_use]
    pub const fn not_null(mut self) -> Self {
        self.column.allow_null = Some(false);
        self
    }

    /// Marks the column as explicitly nullable.
    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.column.allow_null = Some(true);
        self
    }

    /// Marks the column as (part of) the primary key.
    ///
    /// Nullability is left untouched: dialects decide whether a key column
    /// needs an explicit `NOT NULL`.
    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.column.primary_key = true;
        self
    }

    /// Lets the database generate values, starting at 1 in steps of 1.
    #[must_use]
    pub const fn auto_increment(mut self) -> Self {
        self.column.auto_increment = true;
        self
    }

    /// Lets the database generate values with an explicit start and step.
    #[must_use]
    pub const fn identity(mut self, start: i64, increment: i64) -> Self {
        self.column.auto_increment = true;
        self.column.identity = IdentityOptions { start, increment };
        self
    }

    /// Adds a UNIQUE constraint.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.column.unique = true;
        self
    }

    /// Sets a literal default.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Literal>) -> Self {
        self.column.default = Some(DefaultValue::Value(value.into()));
        self
    }

    /// Sets a raw SQL default expression.
    #[must_use]
    pub fn default_expr(mut self, expr: impl Into<String>) -> Self {
        self.column.default = Some(DefaultValue::Expression(expr.into()));
        self
    }

    /// Defaults the column to the current time, filled in by the application.
    #[must_use]
    pub fn default_now(mut self) -> Self {
        self.column.default = Some(DefaultValue::Now);
        self
    }

    /// Attaches a column comment.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.column.comment = Some(comment.into());
        self
    }

    /// Adds a foreign key reference.
    #[must_use]
    pub fn references(mut self, reference: ForeignKeyRef) -> Self {
        self.column.references = Some(reference);
        self
    }

    /// Finishes the column.
    #[must_use]
    pub fn build(self) -> ColumnDefinition {
        self.column
    }
}

/// Creates an INTEGER column builder.
#[must_use]
pub fn integer(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, DataType::Integer)
}

/// Creates a BIGINT column builder.
#[must_use]
pub fn bigint(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, DataType::BigInt)
}

/// Creates a VARCHAR(255) column builder.
#[must_use]
pub fn string(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, DataType::string())
}

/// Creates a TEXT column builder.
#[must_use]
pub fn text(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, DataType::Text)
}

/// Creates a BOOLEAN column builder.
#[must_use]
pub fn boolean(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, DataType::Boolean)
}

/// Creates a date-time column builder.
#[must_use]
pub fn date(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, DataType::Date)
}

/// Creates an enum column builder.
#[must_use]
pub fn enumeration<I, S>(name: impl Into<String>, values: I) -> ColumnBuilder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ColumnBuilder::new(name, DataType::enumeration(values))
}
