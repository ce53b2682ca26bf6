//! Model instances and their lifecycle operations.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use oxide_ddl_core::{DefaultValue, Literal};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{OrmError, Result};
use crate::executor::{QueryExecutor, QueryKind};
use crate::hooks::HookKind;
use crate::model::{ModelDefinition, value_to_literal};

/// Options for [`ModelInstance::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Whether the row does not exist in the database yet.
    pub is_new_record: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            is_new_record: true,
        }
    }
}

/// Options for [`ModelInstance::save`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveOptions {
    /// Leave `updatedAt` untouched.
    pub silent: bool,
}

/// Options for [`ModelInstance::restore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreOptions {
    /// Run the restore hooks.
    pub hooks: bool,
    /// Leave `updatedAt` untouched.
    pub silent: bool,
}

impl Default for RestoreOptions {
    fn default() -> Self {
        Self {
            hooks: true,
            silent: false,
        }
    }
}

/// Options for [`ModelInstance::destroy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestroyOptions {
    /// Run the destroy hooks.
    pub hooks: bool,
    /// Delete the row even if the model is paranoid.
    pub force: bool,
}

impl Default for DestroyOptions {
    fn default() -> Self {
        Self {
            hooks: true,
            force: false,
        }
    }
}

/// One row of a model, with change tracking.
#[derive(Debug, Clone)]
pub struct ModelInstance {
    model: Arc<ModelDefinition>,
    data_values: Map<String, Value>,
    previous_data_values: Map<String, Value>,
    changed: BTreeSet<String>,
    is_new_record: bool,
}

impl ModelInstance {
    /// Builds an instance from raw values.
    ///
    /// New records get the literal column defaults for absent columns and
    /// start with every value marked as changed. Persisted records start
    /// clean, with the given values as their previous values.
    #[must_use]
    pub fn build(model: Arc<ModelDefinition>, values: Map<String, Value>, options: BuildOptions) -> Self {
        let mut instance = Self {
            model,
            data_values: values,
            previous_data_values: Map::new(),
            changed: BTreeSet::new(),
            is_new_record: options.is_new_record,
        };

        if options.is_new_record {
            let now = Value::String(timestamp());
            let defaults: Vec<(String, Value)> = instance
                .model
                .table()
                .columns()
                .iter()
                .filter(|c| !instance.data_values.contains_key(&c.name))
                .filter_map(|c| match &c.default {
                    Some(DefaultValue::Now) => Some((c.name.clone(), now.clone())),
                    Some(_) => instance.model.column_default(&c.name).map(|v| (c.name.clone(), v)),
                    None => None,
                })
                .collect();
            instance.data_values.extend(defaults);
            instance.changed = instance.data_values.keys().cloned().collect();
        } else {
            instance.previous_data_values = instance.data_values.clone();
        }

        instance
    }

    /// The model this instance belongs to.
    #[must_use]
    pub fn model(&self) -> &ModelDefinition {
        &self.model
    }

    /// Current value of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data_values.get(key)
    }

    /// Value of `key` as last loaded or saved.
    #[must_use]
    pub fn previous(&self, key: &str) -> Option<&Value> {
        self.previous_data_values.get(key)
    }

    /// All current values.
    #[must_use]
    pub const fn data_values(&self) -> &Map<String, Value> {
        &self.data_values
    }

    /// Sets `key`, marking it changed if it differs from the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if self.previous_data_values.get(&key) == Some(&value) {
            self.changed.remove(&key);
        } else {
            self.changed.insert(key.clone());
        }
        self.data_values.insert(key, value);
    }

    /// Keys changed since the last load or save.
    pub fn changed(&self) -> impl Iterator<Item = &str> {
        self.changed.iter().map(String::as_str)
    }

    /// Whether the row has not been inserted yet.
    #[must_use]
    pub const fn is_new_record(&self) -> bool {
        self.is_new_record
    }

    /// Persists the instance.
    ///
    /// New records are inserted. Persisted records issue an `UPDATE` of
    /// the changed columns, keyed by the primary key; when nothing changed
    /// no statement runs.
    ///
    /// # Errors
    ///
    /// Returns [`OrmError::MissingPrimaryKey`] for a persisted instance
    /// without a key value, or the executor's error.
    pub async fn save<E: QueryExecutor>(&mut self, executor: &E, options: SaveOptions) -> Result<()> {
        let model = Arc::clone(&self.model);
        let table = model.table();
        let generator = model.generator();

        // Timestamps land on the instance only once the statement succeeds.
        let now = timestamp();
        let mut pending = self.data_values.clone();
        let mut changed = self.changed.clone();
        let mut stamp = |column: &str| {
            pending.insert(column.to_string(), Value::String(now.clone()));
            changed.insert(column.to_string());
        };

        if !options.silent {
            if let Some(updated_at) = table.updated_at() {
                if self.is_new_record || !self.changed.is_empty() {
                    stamp(updated_at);
                }
            }
        }

        if self.is_new_record {
            if let Some(created_at) = table.created_at() {
                if !self.data_values.contains_key(created_at) {
                    stamp(created_at);
                }
            }

            let values = self.column_values(&pending, |_| true);
            let sql = generator.insert_query(table.table_ref(), &values);
            let output = executor.query_raw(&sql, QueryKind::Insert).await?;
            debug!(model = model.name(), affected_rows = output.affected_rows, "Inserted instance");
            self.is_new_record = false;
        } else {
            if changed.is_empty() {
                debug!(model = model.name(), "No changes to save");
                return Ok(());
            }

            let filter = self.primary_key_filter()?;
            let values = self.column_values(&pending, |name| changed.contains(name));
            let sql = generator.update_query(table.table_ref(), &values, &filter);
            let output = executor.query_raw(&sql, QueryKind::Update).await?;
            debug!(model = model.name(), affected_rows = output.affected_rows, "Updated instance");
        }

        self.data_values = pending;
        self.previous_data_values = self.data_values.clone();
        self.changed.clear();
        Ok(())
    }

    /// Undoes a soft delete.
    ///
    /// `deletedAt` is reset to its column default (NULL when there is
    /// none) and saved. Absent options mean [`RestoreOptions::default`].
    ///
    /// # Errors
    ///
    /// Returns [`OrmError::NotParanoid`] if the model has no soft-delete
    /// column, a hook error, or the errors of [`ModelInstance::save`].
    pub async fn restore<E: QueryExecutor>(
        &mut self,
        executor: &E,
        options: Option<RestoreOptions>,
    ) -> Result<()> {
        let options = options.unwrap_or_default();
        let model = Arc::clone(&self.model);
        let Some(deleted_at) = model.table().deleted_at() else {
            return Err(OrmError::NotParanoid {
                model: model.name().to_string(),
            });
        };

        if options.hooks {
            model.hooks().run(HookKind::BeforeRestore, self)?;
        }

        let restored = model.column_default(deleted_at).unwrap_or(Value::Null);
        self.set(deleted_at, restored);
        self.save(executor, SaveOptions { silent: options.silent })
            .await?;

        if options.hooks {
            model.hooks().run(HookKind::AfterRestore, self)?;
        }
        debug!(model = model.name(), "Restored instance");
        Ok(())
    }

    /// Deletes the instance.
    ///
    /// Paranoid models get `deletedAt` set to now unless `force` is given;
    /// everything else issues a `DELETE` keyed by the primary key. Absent
    /// options mean [`DestroyOptions::default`].
    ///
    /// # Errors
    ///
    /// Returns a hook error, [`OrmError::MissingPrimaryKey`], or the
    /// executor's error.
    pub async fn destroy<E: QueryExecutor>(
        &mut self,
        executor: &E,
        options: Option<DestroyOptions>,
    ) -> Result<()> {
        let options = options.unwrap_or_default();
        let model = Arc::clone(&self.model);

        if options.hooks {
            model.hooks().run(HookKind::BeforeDestroy, self)?;
        }

        match model.table().deleted_at() {
            Some(deleted_at) if !options.force => {
                self.set(deleted_at, timestamp());
                self.save(executor, SaveOptions::default()).await?;
            }
            _ => {
                let filter = self.primary_key_filter()?;
                let sql = model
                    .generator()
                    .delete_query(model.table().table_ref(), &filter);
                let output = executor.query_raw(&sql, QueryKind::Delete).await?;
                debug!(model = model.name(), affected_rows = output.affected_rows, "Deleted instance");
            }
        }

        if options.hooks {
            model.hooks().run(HookKind::AfterDestroy, self)?;
        }
        Ok(())
    }

    /// `values` restricted to the table's columns, in column order.
    fn column_values(
        &self,
        values: &Map<String, Value>,
        include: impl Fn(&str) -> bool,
    ) -> Vec<(String, Literal)> {
        self.model
            .table()
            .columns()
            .iter()
            .filter(|c| include(&c.name))
            .filter_map(|c| {
                values
                    .get(&c.name)
                    .map(|value| (c.name.clone(), value_to_literal(value)))
            })
            .collect()
    }

    fn primary_key_filter(&self) -> Result<Vec<(String, Literal)>> {
        self.model
            .table()
            .primary_keys()
            .into_iter()
            .map(|pk| match self.data_values.get(pk) {
                Some(value) if !value.is_null() => Ok((pk.to_string(), value_to_literal(value))),
                _ => Err(OrmError::MissingPrimaryKey {
                    model: self.model.name().to_string(),
                    column: pk.to_string(),
                }),
            })
            .collect()
    }
}

fn timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S%.3f %:z").to_string()
}
