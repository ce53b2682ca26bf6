//! # oxide-ddl-core
//!
//! Dialect-aware `CREATE TABLE` generation from one table model.
//!
//! This crate provides:
//! - A dialect-neutral table model ([`TableDefinition`], [`ColumnDefinition`])
//! - Capability descriptors for sqlite, postgres, mysql, mariadb, mssql,
//!   db2, ibmi and snowflake
//! - A [`QueryGenerator`] rendering column fragments, `CREATE TABLE`,
//!   `DROP TABLE`, postgres enum types and literal DML
//! - A version gate for syntax that older servers lack
//!
//! ## Generating a table
//!
//! ```rust
//! use oxide_ddl_core::{
//!     CreateTableOptions, Dialect, ForeignKeyRef, QueryGenerator, ReferentialAction,
//!     TableDefinition, integer,
//! };
//!
//! let projects = TableDefinition::builder("projects")
//!     .schema("bar")
//!     .column(
//!         integer("user_id")
//!             .references(
//!                 ForeignKeyRef::new(oxide_ddl_core::TableRef::new("users").with_schema("bar"))
//!                     .on_delete(ReferentialAction::NoAction),
//!             )
//!             .build(),
//!     )
//!     .timestamps(false)
//!     .build();
//!
//! let generator = QueryGenerator::new(Dialect::Sqlite);
//! let columns = generator.attributes_to_sql(&projects).unwrap();
//! let sql = generator.create_table_query(
//!     projects.table_ref(),
//!     &columns,
//!     &CreateTableOptions::default(),
//! );
//!
//! assert_eq!(
//!     sql,
//!     "CREATE TABLE IF NOT EXISTS `bar.projects` (`id` INTEGER PRIMARY KEY AUTOINCREMENT, \
//!      `user_id` INTEGER REFERENCES `bar.users` (`id`) ON DELETE NO ACTION);"
//! );
//! ```

pub mod config;
pub mod dialect;
pub mod error;
pub mod generator;
pub mod schema;
pub mod version;

pub use config::GeneratorConfig;
pub use dialect::{Dialect, DialectDescriptor};
pub use error::{DdlError, Result};
pub use generator::{
    ColumnFragments, CreateTableOptions, DropTableOptions, QueryGenerator, UniqueKey,
};
pub use schema::{
    ColumnBuilder, ColumnDefinition, DataType, DefaultValue, ForeignKeyRef, IdentityOptions,
    Literal, ReferentialAction, TableBuilder, TableDefinition, TableOptions, TableRef, bigint,
    boolean, date, enumeration, integer, string, text,
};
pub use version::{DatabaseVersion, supports_if_not_exists};
