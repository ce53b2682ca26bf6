//! Row-level statements with literal values.
//!
//! Values are escaped inline; there are no bind parameters.

use super::QueryGenerator;
use crate::dialect::Dialect;
use crate::schema::{Literal, TableRef};

impl QueryGenerator {
    /// Renders `INSERT INTO ... VALUES (...)`.
    ///
    /// An empty value list inserts a row of defaults.
    #[must_use]
    pub fn insert_query(&self, table: &TableRef, values: &[(String, Literal)]) -> String {
        let quoted_table = self.quote_table(table);
        if values.is_empty() {
            return match self.dialect {
                Dialect::Mysql | Dialect::Mariadb => {
                    format!("INSERT INTO {quoted_table} () VALUES ();")
                }
                _ => format!("INSERT INTO {quoted_table} DEFAULT VALUES;"),
            };
        }

        let columns: Vec<String> = values
            .iter()
            .map(|(name, _)| self.quote_identifier(name))
            .collect();
        let literals: Vec<String> = values.iter().map(|(_, value)| self.escape(value)).collect();
        format!(
            "INSERT INTO {quoted_table} ({}) VALUES ({});",
            columns.join(","),
            literals.join(",")
        )
    }

    /// Renders `UPDATE ... SET ... WHERE ...`.
    ///
    /// `filter` entries are AND-ed equality tests; an empty filter updates
    /// every row.
    #[must_use]
    pub fn update_query(
        &self,
        table: &TableRef,
        values: &[(String, Literal)],
        filter: &[(String, Literal)],
    ) -> String {
        let assignments: Vec<String> = values
            .iter()
            .map(|(name, value)| format!("{}={}", self.quote_identifier(name), self.escape(value)))
            .collect();
        format!(
            "UPDATE {} SET {}{};",
            self.quote_table(table),
            assignments.join(","),
            self.where_clause(filter)
        )
    }

    /// Renders `DELETE FROM ... WHERE ...`.
    #[must_use]
    pub fn delete_query(&self, table: &TableRef, filter: &[(String, Literal)]) -> String {
        format!(
            "DELETE FROM {}{};",
            self.quote_table(table),
            self.where_clause(filter)
        )
    }

    fn where_clause(&self, filter: &[(String, Literal)]) -> String {
        if filter.is_empty() {
            return String::new();
        }
        let conditions: Vec<String> = filter
            .iter()
            .map(|(name, value)| match value {
                Literal::Null => format!("{} IS NULL", self.quote_identifier(name)),
                _ => format!("{} = {}", self.quote_identifier(name), self.escape(value)),
            })
            .collect();
        format!(" WHERE {}", conditions.join(" AND "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, value: impl Into<Literal>) -> (String, Literal) {
        (name.to_string(), value.into())
    }

    #[test]
    fn test_update_query() {
        let generator = QueryGenerator::new(Dialect::Postgres);
        let sql = generator.update_query(
            &TableRef::new("users"),
            &[pair("deletedAt", Literal::Null), pair("name", "bob")],
            &[pair("id", 1)],
        );
        assert_eq!(
            sql,
            "UPDATE \"users\" SET \"deletedAt\"=NULL,\"name\"='bob' WHERE \"id\" = 1;"
        );
    }

    #[test]
    fn test_insert_query() {
        let generator = QueryGenerator::new(Dialect::Mssql);
        let sql = generator.insert_query(&TableRef::new("users"), &[pair("name", "bob"), pair("ok", true)]);
        assert_eq!(sql, "INSERT INTO [users] ([name],[ok]) VALUES (N'bob',1);");
    }

    #[test]
    fn test_insert_defaults() {
        let table = TableRef::new("users");
        assert_eq!(
            QueryGenerator::new(Dialect::Mysql).insert_query(&table, &[]),
            "INSERT INTO `users` () VALUES ();"
        );
        assert_eq!(
            QueryGenerator::new(Dialect::Sqlite).insert_query(&table, &[]),
            "INSERT INTO `users` DEFAULT VALUES;"
        );
    }

    #[test]
    fn test_delete_query_null_filter() {
        let generator = QueryGenerator::new(Dialect::Sqlite);
        let sql = generator.delete_query(
            &TableRef::new("users"),
            &[pair("id", 3), pair("deletedAt", Literal::Null)],
        );
        assert_eq!(sql, "DELETE FROM `users` WHERE `id` = 3 AND `deletedAt` IS NULL;");
    }
}
