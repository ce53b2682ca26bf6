//! Model definitions.

use std::sync::Arc;

use oxide_ddl_core::{DefaultValue, Literal, QueryGenerator, TableDefinition};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::hooks::{HookKind, Hooks};
use crate::instance::{BuildOptions, ModelInstance};

/// A model: its table, the generator for its database and its hooks.
///
/// Definitions are immutable once built and shared between instances
/// through an [`Arc`].
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use oxide_ddl_core::{Dialect, QueryGenerator, TableDefinition, bigint, date};
/// use oxide_ddl_orm::ModelDefinition;
///
/// let table = TableDefinition::builder("users")
///     .column(bigint("id").primary_key().auto_increment().build())
///     .column(date("deletedAt").build())
///     .paranoid(true)
///     .build();
///
/// let user = Arc::new(ModelDefinition::new(
///     "User",
///     table,
///     QueryGenerator::new(Dialect::Postgres),
/// ));
/// assert!(user.is_paranoid());
/// ```
#[derive(Debug)]
pub struct ModelDefinition {
    name: String,
    table: TableDefinition,
    generator: QueryGenerator,
    hooks: Hooks,
}

impl ModelDefinition {
    /// Creates a model without hooks.
    #[must_use]
    pub fn new(name: impl Into<String>, table: TableDefinition, generator: QueryGenerator) -> Self {
        Self {
            name: name.into(),
            table,
            generator,
            hooks: Hooks::default(),
        }
    }

    /// Registers a lifecycle hook.
    #[must_use]
    pub fn hook<F>(mut self, kind: HookKind, hook: F) -> Self
    where
        F: Fn(&mut ModelInstance) -> Result<()> + Send + Sync + 'static,
    {
        self.hooks.add(kind, Box::new(hook));
        self
    }

    /// Model name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The backing table.
    #[must_use]
    pub const fn table(&self) -> &TableDefinition {
        &self.table
    }

    /// The generator used for this model's statements.
    #[must_use]
    pub const fn generator(&self) -> &QueryGenerator {
        &self.generator
    }

    /// Registered hooks.
    #[must_use]
    pub const fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    /// Whether instances are soft-deleted through `deletedAt`.
    #[must_use]
    pub fn is_paranoid(&self) -> bool {
        self.table.deleted_at().is_some()
    }

    /// Builds an instance of this model.
    #[must_use]
    pub fn build(self: &Arc<Self>, values: Map<String, Value>, options: BuildOptions) -> ModelInstance {
        ModelInstance::build(Arc::clone(self), values, options)
    }

    /// The literal default of `column`, as a JSON value.
    pub(crate) fn column_default(&self, column: &str) -> Option<Value> {
        self.table
            .column(column)
            .and_then(|c| c.default.as_ref())
            .and_then(|default| match default {
                DefaultValue::Value(literal) => Some(literal_to_value(literal)),
                DefaultValue::Expression(_) | DefaultValue::Now => None,
            })
    }
}

fn literal_to_value(literal: &Literal) -> Value {
    match literal {
        Literal::Null => Value::Null,
        Literal::Bool(b) => Value::Bool(*b),
        Literal::Integer(n) => Value::from(*n),
        Literal::Float(f) => Value::from(*f),
        Literal::Text(s) => Value::String(s.clone()),
    }
}

pub(crate) fn value_to_literal(value: &Value) -> Literal {
    match value {
        Value::Null => Literal::Null,
        Value::Bool(b) => Literal::Bool(*b),
        Value::Number(n) => n
            .as_i64()
            .map(Literal::Integer)
            .or_else(|| n.as_f64().map(Literal::Float))
            .unwrap_or_else(|| Literal::Text(n.to_string())),
        Value::String(s) => Literal::Text(s.clone()),
        Value::Array(_) | Value::Object(_) => Literal::Text(value.to_string()),
    }
}
