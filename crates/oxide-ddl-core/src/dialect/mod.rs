//! Dialect descriptors.
//!
//! Every supported backend is described by a `'static`
//! [`DialectDescriptor`]: quoting, type names, identity syntax, enum
//! strategy, constraint placement and the existence guard used by
//! `CREATE TABLE`. The generator runs one algorithm over these records
//! instead of one implementation per database.

mod db2;
mod mssql;
mod mysql;
mod postgres;
mod snowflake;
mod sqlite;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DdlError, Result};
use crate::schema::DataType;

/// The closed set of supported database backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dialect {
    /// SQLite.
    Sqlite,
    /// PostgreSQL.
    Postgres,
    /// MySQL.
    Mysql,
    /// MariaDB.
    Mariadb,
    /// Microsoft SQL Server.
    Mssql,
    /// IBM Db2 (LUW).
    Db2,
    /// Db2 for IBM i.
    Ibmi,
    /// Snowflake.
    Snowflake,
}

impl Dialect {
    /// All dialects, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Sqlite,
        Self::Postgres,
        Self::Mysql,
        Self::Mariadb,
        Self::Mssql,
        Self::Db2,
        Self::Ibmi,
        Self::Snowflake,
    ];

    /// Returns the canonical dialect name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Returns the capability record for this dialect.
    #[must_use]
    pub fn descriptor(self) -> &'static DialectDescriptor {
        match self {
            Self::Sqlite => &sqlite::SQLITE,
            Self::Postgres => &postgres::POSTGRES,
            Self::Mysql => &mysql::MYSQL,
            Self::Mariadb => &mysql::MARIADB,
            Self::Mssql => &mssql::MSSQL,
            Self::Db2 => &db2::DB2,
            Self::Ibmi => &db2::IBMI,
            Self::Snowflake => &snowflake::SNOWFLAKE,
        }
    }
}

impl FromStr for Dialect {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "mysql" => Ok(Self::Mysql),
            "mariadb" => Ok(Self::Mariadb),
            "mssql" | "sqlserver" => Ok(Self::Mssql),
            "db2" => Ok(Self::Db2),
            "ibmi" => Ok(Self::Ibmi),
            "snowflake" => Ok(Self::Snowflake),
            _ => Err(DdlError::UnsupportedDialect(s.to_string())),
        }
    }
}

impl TryFrom<String> for Dialect {
    type Error = DdlError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Dialect> for String {
    fn from(dialect: Dialect) -> Self {
        dialect.name().to_string()
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a schema and a table name combine into one reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaQualification {
    /// Two quoted identifiers joined by a dot: `"foo"."users"`.
    Separate,
    /// One quoted identifier containing the dot: `` `foo.users` ``.
    Joined,
}

/// How string literals escape embedded quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringEscape {
    /// `'` becomes `''`.
    DoubledQuote,
    /// `'` becomes `\'` and `\` becomes `\\`.
    Backslash,
}

/// Where the identity template goes in a column fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityPlacement {
    /// Right after the nullability keywords.
    AfterNullability,
    /// Right after `PRIMARY KEY` (sqlite `AUTOINCREMENT`).
    AfterPrimaryKey,
}

/// How enum columns are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumStrategy {
    /// A separately created, named type (`"schema"."enum_table_column"`).
    NamedType,
    /// A native `ENUM('a', 'b')` column type.
    NativeColumnType,
    /// A string column with `CHECK (col IN(...))`. When `terminal`, the
    /// check ends the fragment and no other modifiers follow.
    CheckConstraint {
        /// Whether the check ends the column fragment.
        terminal: bool,
    },
    /// A plain string column with no value restriction.
    PlainString,
}

/// Where a constraint is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintPlacement {
    /// Inside the column fragment.
    Inline,
    /// As a table-level clause after all columns.
    Trailing,
}

/// Which column types may not carry a `DEFAULT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultRestriction {
    /// Every type accepts defaults.
    None,
    /// TEXT and BLOB columns do not.
    TextAndBlob,
    /// TEXT, BLOB and JSON columns do not.
    TextBlobAndJson,
}

impl DefaultRestriction {
    /// Whether a column of type `data_type` may have a default.
    #[must_use]
    pub const fn allows(self, data_type: &DataType) -> bool {
        match self {
            Self::None => true,
            Self::TextAndBlob => !matches!(data_type, DataType::Text | DataType::Blob),
            Self::TextBlobAndJson => {
                !matches!(data_type, DataType::Text | DataType::Blob | DataType::Json)
            }
        }
    }
}

/// How `CREATE TABLE` / `DROP TABLE` are made idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExistenceGuard {
    /// `IF NOT EXISTS` / `IF EXISTS` keywords, subject to the version gate.
    IfNotExists,
    /// `IF OBJECT_ID('<table>', 'U') IS [NOT] NULL` prefix.
    ObjectIdCheck,
    /// A compound statement whose continue handler swallows the
    /// duplicate/undefined object SQLSTATE.
    DuplicateObjectHandler,
}

/// How a table comment is attached to `CREATE TABLE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableCommentStyle {
    /// Comments are dropped.
    Unsupported,
    /// A `COMMENT '...'` table option after the column list.
    TableOption,
    /// A separate `COMMENT ON TABLE ... IS '...'` statement.
    CommentOn,
}

/// Dialect-specific names of the logical column types.
#[derive(Debug, Clone, Copy)]
pub struct TypeNames {
    pub integer: &'static str,
    pub bigint: &'static str,
    pub smallint: &'static str,
    pub float: &'static str,
    pub double: &'static str,
    /// Variable-length string type, rendered with its length.
    pub varchar: &'static str,
    /// Fixed-length string type, rendered with its length.
    pub char: &'static str,
    pub text: &'static str,
    pub boolean: &'static str,
    pub date: &'static str,
    pub date_only: &'static str,
    pub time: &'static str,
    pub uuid: &'static str,
    pub json: &'static str,
    pub blob: &'static str,
    /// Column type for enums that are not native types.
    pub enum_fallback: &'static str,
}

/// Capability record for one dialect.
#[derive(Debug, Clone, Copy)]
pub struct DialectDescriptor {
    /// Canonical name.
    pub name: &'static str,
    /// Opening and closing identifier delimiters.
    pub quotes: (char, char),
    /// How schema and table names combine.
    pub schema_qualification: SchemaQualification,
    /// Prefix for string literals (`N` for unicode on mssql).
    pub string_prefix: &'static str,
    /// Escaping of embedded quotes in string literals.
    pub string_escape: StringEscape,
    /// Literals for `true` and `false`.
    pub boolean_literals: (&'static str, &'static str),
    /// Type names.
    pub types: TypeNames,
    /// Identity clause with `{start}` and `{increment}` placeholders.
    pub identity_template: &'static str,
    /// Where the identity clause goes.
    pub identity_placement: IdentityPlacement,
    /// Whether auto-increment integer keys become `SERIAL` types.
    pub serial_types: bool,
    /// Enum representation.
    pub enum_strategy: EnumStrategy,
    /// Where `PRIMARY KEY` is written.
    pub primary_key_placement: ConstraintPlacement,
    /// Separator between columns of the trailing `PRIMARY KEY (...)`.
    pub primary_key_separator: &'static str,
    /// Where `REFERENCES` is written.
    pub foreign_key_placement: ConstraintPlacement,
    /// Whether `ON UPDATE` referential actions are emitted.
    pub supports_on_update: bool,
    /// Whether self-referencing foreign keys keep their actions.
    pub self_reference_actions: bool,
    /// Whether primary key and unique columns are always `NOT NULL`.
    pub not_null_for_keys: bool,
    /// Whether nullable columns print an explicit `NULL`.
    pub explicit_null: bool,
    /// Whether column comments are written inline.
    pub inline_comments: bool,
    /// Which types may not carry defaults.
    pub default_restriction: DefaultRestriction,
    /// Existence guard for create/drop.
    pub existence_guard: ExistenceGuard,
    /// Minimum version supporting `IF NOT EXISTS`, if version-gated.
    pub if_not_exists_since: Option<(u64, u64, u64)>,
    /// Default storage engine appended to `CREATE TABLE`.
    pub default_engine: Option<&'static str>,
    /// How table comments are written.
    pub table_comments: TableCommentStyle,
    /// Whether `DROP TABLE ... CASCADE` is accepted.
    pub supports_drop_cascade: bool,
}

impl DialectDescriptor {
    /// Renders the column type for `data_type`.
    ///
    /// Enum columns get the fallback string type here; native and named
    /// enum rendering happens in the column renderer.
    #[must_use]
    pub fn type_name(&self, data_type: &DataType) -> String {
        let t = &self.types;
        match data_type {
            DataType::Integer => t.integer.to_string(),
            DataType::BigInt => t.bigint.to_string(),
            DataType::SmallInt => t.smallint.to_string(),
            DataType::Float => t.float.to_string(),
            DataType::Double => t.double.to_string(),
            DataType::Decimal { precision, scale } => format!("DECIMAL({precision},{scale})"),
            DataType::String(len) => format!("{}({len})", t.varchar),
            DataType::Char(len) => format!("{}({len})", t.char),
            DataType::Text => t.text.to_string(),
            DataType::Boolean => t.boolean.to_string(),
            DataType::Date => t.date.to_string(),
            DataType::DateOnly => t.date_only.to_string(),
            DataType::Time => t.time.to_string(),
            DataType::Uuid => t.uuid.to_string(),
            DataType::Json => t.json.to_string(),
            DataType::Blob => t.blob.to_string(),
            DataType::Enum(_) => t.enum_fallback.to_string(),
        }
    }

    /// Renders the identity clause for the given start and step.
    #[must_use]
    pub fn identity_clause(&self, start: i64, increment: i64) -> String {
        self.identity_template
            .replace("{start}", &start.to_string())
            .replace("{increment}", &increment.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("postgres".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("PostgreSQL".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("mariadb".parse::<Dialect>().unwrap(), Dialect::Mariadb);
        assert_eq!(" ibmi ".parse::<Dialect>().unwrap(), Dialect::Ibmi);
    }

    #[test]
    fn test_unknown_dialect_fails() {
        let err = "oracle".parse::<Dialect>().unwrap_err();
        assert!(matches!(err, DdlError::UnsupportedDialect(ref name) if name == "oracle"));
    }

    #[test]
    fn test_names_round_trip() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.name().parse::<Dialect>().unwrap(), dialect);
        }
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&Dialect::Mssql).unwrap();
        assert_eq!(json, "\"mssql\"");
        let back: Dialect = serde_json::from_str("\"sqlserver\"").unwrap();
        assert_eq!(back, Dialect::Mssql);
        assert!(serde_json::from_str::<Dialect>("\"oracle\"").is_err());
    }

    #[test]
    fn test_identity_clause_substitutes_parameters() {
        let clause = Dialect::Db2.descriptor().identity_clause(10, 2);
        assert_eq!(
            clause,
            " GENERATED BY DEFAULT AS IDENTITY(START WITH 10, INCREMENT BY 2)"
        );
        assert_eq!(Dialect::Mssql.descriptor().identity_clause(1, 1), " IDENTITY(1,1)");
    }

    #[test]
    fn test_default_restrictions() {
        let mysql = Dialect::Mysql.descriptor().default_restriction;
        assert!(!mysql.allows(&DataType::Json));
        assert!(mysql.allows(&DataType::string()));
        let mssql = Dialect::Mssql.descriptor().default_restriction;
        assert!(mssql.allows(&DataType::Json));
        assert!(!mssql.allows(&DataType::Text));
    }
}
