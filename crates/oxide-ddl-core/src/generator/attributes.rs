//! Column fragment rendering.

use tracing::warn;

use super::{ColumnFragments, QueryGenerator};
use crate::dialect::{EnumStrategy, IdentityPlacement};
use crate::error::{DdlError, Result};
use crate::schema::{ColumnDefinition, DataType, DefaultValue, TableDefinition, TableRef};

impl QueryGenerator {
    /// Renders every column of `table` into its column fragment.
    ///
    /// The result preserves column order. Fragments still contain inline
    /// `PRIMARY KEY` and `REFERENCES` clauses; [`create_table_query`]
    /// relocates them for dialects that want table-level constraints.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::EmptyEnum`] for an enum column without values.
    ///
    /// [`create_table_query`]: QueryGenerator::create_table_query
    pub fn attributes_to_sql(&self, table: &TableDefinition) -> Result<ColumnFragments> {
        let mut fragments = ColumnFragments::new();
        for column in table.columns() {
            let fragment = self.attribute_to_sql(table.table_ref(), column)?;
            fragments.insert(column.name.clone(), fragment);
        }
        Ok(fragments)
    }

    /// Renders a single column definition.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::EmptyEnum`] for an enum column without values.
    pub fn attribute_to_sql(&self, table: &TableRef, column: &ColumnDefinition) -> Result<String> {
        let descriptor = self.descriptor();

        let mut sql = match &column.data_type {
            DataType::Enum(values) => {
                if values.is_empty() {
                    return Err(DdlError::EmptyEnum {
                        column: column.name.clone(),
                    });
                }
                let list = self.enum_value_list(values);
                match descriptor.enum_strategy {
                    EnumStrategy::NamedType | EnumStrategy::NativeColumnType => {
                        format!("ENUM({list})")
                    }
                    EnumStrategy::CheckConstraint { terminal } => {
                        let check = format!(
                            "{} CHECK ({} IN({list}))",
                            descriptor.types.enum_fallback,
                            self.quote_identifier(&column.name)
                        );
                        if terminal {
                            return Ok(check);
                        }
                        check
                    }
                    EnumStrategy::PlainString => descriptor.types.enum_fallback.to_string(),
                }
            }
            other => descriptor.type_name(other),
        };

        let schemable_default = column.default.as_ref().filter(|d| d.is_schemable());

        let forced_not_null = descriptor.not_null_for_keys && (column.primary_key || column.unique);
        if column.is_not_null() || forced_not_null {
            sql.push_str(" NOT NULL");
        } else if descriptor.explicit_null && !column.primary_key && schemable_default.is_none() {
            sql.push_str(" NULL");
        }

        if column.auto_increment && descriptor.identity_placement == IdentityPlacement::AfterNullability
        {
            sql.push_str(&self.identity_clause(column));
        }

        if let Some(default) = schemable_default {
            if descriptor.default_restriction.allows(&column.data_type) {
                sql.push_str(" DEFAULT ");
                sql.push_str(&self.render_default(default));
            }
        }

        if column.unique {
            sql.push_str(" UNIQUE");
        }

        if column.primary_key {
            sql.push_str(" PRIMARY KEY");
            if column.auto_increment
                && descriptor.identity_placement == IdentityPlacement::AfterPrimaryKey
            {
                sql.push_str(&self.identity_clause(column));
            }
        }

        if let Some(comment) = column.comment.as_deref().filter(|_| descriptor.inline_comments) {
            sql.push_str(" COMMENT ");
            sql.push_str(&self.escape_str(comment));
        }

        if let Some(reference) = &column.references {
            let self_reference = &reference.table == table;
            let keep_actions = descriptor.self_reference_actions || !self_reference;

            sql.push_str(" REFERENCES ");
            sql.push_str(&self.quote_table(&reference.table));
            sql.push_str(" (");
            sql.push_str(&self.quote_identifier(&reference.column));
            sql.push(')');

            if keep_actions {
                if let Some(action) = reference.on_delete {
                    sql.push_str(" ON DELETE ");
                    sql.push_str(action.as_sql());
                }
                if let Some(action) = reference.on_update.filter(|_| descriptor.supports_on_update) {
                    sql.push_str(" ON UPDATE ");
                    sql.push_str(action.as_sql());
                }
            } else if reference.on_delete.is_some() || reference.on_update.is_some() {
                warn!(
                    dialect = %self.dialect,
                    table = %table,
                    column = %column.name,
                    "Dropping referential actions of self-referencing foreign key"
                );
            }
        }

        Ok(sql)
    }

    fn identity_clause(&self, column: &ColumnDefinition) -> String {
        self.descriptor()
            .identity_clause(column.identity.start, column.identity.increment)
    }

    fn render_default(&self, default: &DefaultValue) -> String {
        match default {
            DefaultValue::Value(literal) => self.escape(literal),
            DefaultValue::Expression(expr) => expr.clone(),
            DefaultValue::Now => String::new(),
        }
    }

    pub(super) fn enum_value_list(&self, values: &[String]) -> String {
        values
            .iter()
            .map(|v| self.escape_str(v))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
