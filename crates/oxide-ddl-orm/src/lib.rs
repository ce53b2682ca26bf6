//! # oxide-ddl-orm
//!
//! Model instance lifecycle over SQL generated by `oxide-ddl-core`.
//!
//! This crate provides:
//! - [`ModelDefinition`]: a table, its generator and lifecycle hooks
//! - [`ModelInstance`]: a row with change tracking and async `save`,
//!   `destroy` and `restore`
//! - [`QueryExecutor`]: the seam where rendered SQL is handed to a database
//!
//! ## Restoring a soft-deleted row
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use oxide_ddl_core::{Dialect, QueryGenerator, TableDefinition, bigint, date};
//! use oxide_ddl_orm::{BuildOptions, ModelDefinition, QueryExecutor, QueryKind, QueryOutput};
//! use serde_json::{Map, json};
//!
//! struct PrintExecutor;
//!
//! impl QueryExecutor for PrintExecutor {
//!     async fn query_raw(&self, sql: &str, _kind: QueryKind) -> oxide_ddl_orm::Result<QueryOutput> {
//!         println!("{sql}");
//!         Ok(QueryOutput { rows: Vec::new(), affected_rows: 1 })
//!     }
//! }
//!
//! async fn example() -> oxide_ddl_orm::Result<()> {
//!     let table = TableDefinition::builder("users")
//!         .column(bigint("id").primary_key().auto_increment().build())
//!         .column(date("deletedAt").build())
//!         .paranoid(true)
//!         .build();
//!     let user = Arc::new(ModelDefinition::new("User", table, QueryGenerator::new(Dialect::Postgres)));
//!
//!     let mut values = Map::new();
//!     values.insert("id".to_string(), json!(1));
//!     let mut instance = user.build(values, BuildOptions { is_new_record: false });
//!
//!     // UPDATE "users" SET "deletedAt"=NULL,"updatedAt"='...' WHERE "id" = 1;
//!     instance.restore(&PrintExecutor, None).await
//! }
//! ```

mod error;
mod executor;
mod hooks;
mod instance;
mod model;

pub use error::{OrmError, Result};
pub use executor::{QueryExecutor, QueryKind, QueryOutput};
pub use hooks::{Hook, HookKind, Hooks};
pub use instance::{BuildOptions, DestroyOptions, ModelInstance, RestoreOptions, SaveOptions};
pub use model::ModelDefinition;
