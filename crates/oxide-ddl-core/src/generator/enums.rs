//! Named enum types for dialects that create them separately.

use super::QueryGenerator;
use crate::dialect::EnumStrategy;
use crate::error::{DdlError, Result};
use crate::schema::TableRef;

impl QueryGenerator {
    /// Quoted name of the enum type backing `column` of `table`.
    ///
    /// The type lives in the table's schema and is named
    /// `enum_<table>_<column>`.
    #[must_use]
    pub fn enum_type_name(&self, table: &TableRef, column: &str) -> String {
        let name = self.quote_identifier(&format!("enum_{}_{column}", table.name));
        match &table.schema {
            Some(schema) => format!("{}.{name}", self.quote_identifier(schema)),
            None => name,
        }
    }

    /// Renders `CREATE TYPE ... AS ENUM(...)` for an enum column.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::Unsupported`] unless the dialect uses named
    /// enum types, and [`DdlError::EmptyEnum`] when `values` is empty.
    pub fn create_enum_query(
        &self,
        table: &TableRef,
        column: &str,
        values: &[String],
    ) -> Result<String> {
        self.require_named_enums("CREATE TYPE")?;
        if values.is_empty() {
            return Err(DdlError::EmptyEnum {
                column: column.to_string(),
            });
        }
        Ok(format!(
            "CREATE TYPE {} AS ENUM({});",
            self.enum_type_name(table, column),
            self.enum_value_list(values)
        ))
    }

    /// Renders `DROP TYPE IF EXISTS` for an enum column's type.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::Unsupported`] unless the dialect uses named
    /// enum types.
    pub fn drop_enum_query(&self, table: &TableRef, column: &str) -> Result<String> {
        self.require_named_enums("DROP TYPE")?;
        Ok(format!(
            "DROP TYPE IF EXISTS {};",
            self.enum_type_name(table, column)
        ))
    }

    fn require_named_enums(&self, operation: &'static str) -> Result<()> {
        if self.descriptor().enum_strategy == EnumStrategy::NamedType {
            Ok(())
        } else {
            Err(DdlError::Unsupported {
                operation,
                dialect: self.dialect.name(),
            })
        }
    }
}
