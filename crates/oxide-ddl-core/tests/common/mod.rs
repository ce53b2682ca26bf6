#![allow(dead_code)]

use oxide_ddl_core::{
    CreateTableOptions, DatabaseVersion, Dialect, ForeignKeyRef, QueryGenerator,
    ReferentialAction, TableDefinition, TableRef, enumeration, integer,
};

/// `foo.users` with an implicit id and a `mood` enum.
pub fn foo_users() -> TableDefinition {
    TableDefinition::builder("users")
        .schema("foo")
        .column(enumeration("mood", ["happy", "sad"]).build())
        .timestamps(false)
        .build()
}

/// `bar.projects` with a `user_id` referencing `bar.users`.
pub fn bar_projects() -> TableDefinition {
    TableDefinition::builder("projects")
        .schema("bar")
        .column(
            integer("user_id")
                .references(
                    ForeignKeyRef::new(TableRef::new("users").with_schema("bar"))
                        .on_update(ReferentialAction::Cascade)
                        .on_delete(ReferentialAction::NoAction),
                )
                .build(),
        )
        .timestamps(false)
        .build()
}

/// `images` whose auto-increment primary key also references `files`.
pub fn images() -> TableDefinition {
    TableDefinition::builder("images")
        .column(
            integer("id")
                .primary_key()
                .auto_increment()
                .references(ForeignKeyRef::new("files"))
                .build(),
        )
        .timestamps(false)
        .build()
}

pub fn create_table(dialect: Dialect, table: &TableDefinition) -> String {
    create_table_with(&QueryGenerator::new(dialect), table)
}

pub fn create_table_at(dialect: Dialect, version: &str, table: &TableDefinition) -> String {
    let version: DatabaseVersion = version
        .parse()
        .unwrap_or_else(|e| panic!("Invalid version {version}: {e}"));
    create_table_with(&QueryGenerator::new(dialect).with_database_version(version), table)
}

pub fn create_table_with(generator: &QueryGenerator, table: &TableDefinition) -> String {
    let columns = generator
        .attributes_to_sql(table)
        .unwrap_or_else(|e| panic!("Failed to render columns of {}: {e}", table.name()));
    generator.create_table_query(table.table_ref(), &columns, &CreateTableOptions::default())
}
