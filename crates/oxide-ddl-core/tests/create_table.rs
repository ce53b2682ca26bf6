mod common;

use common::{bar_projects, create_table, create_table_at, create_table_with, foo_users, images};
use oxide_ddl_core::{
    CreateTableOptions, DataType, Dialect, DropTableOptions, ForeignKeyRef, QueryGenerator,
    TableDefinition, TableRef, UniqueKey, integer, string,
};

// Enum column in a schema-qualified table

#[test]
fn enum_table_sqlite() {
    assert_eq!(
        create_table(Dialect::Sqlite, &foo_users()),
        "CREATE TABLE IF NOT EXISTS `foo.users` (`id` INTEGER PRIMARY KEY AUTOINCREMENT, `mood` TEXT);"
    );
}

#[test]
fn enum_table_db2() {
    assert_eq!(
        create_table(Dialect::Db2, &foo_users()),
        r#"CREATE TABLE IF NOT EXISTS "foo"."users" ("id" INTEGER NOT NULL GENERATED BY DEFAULT AS IDENTITY(START WITH 1, INCREMENT BY 1) , "mood" VARCHAR(255) CHECK ("mood" IN('happy', 'sad')), PRIMARY KEY ("id"));"#
    );
}

#[test]
fn enum_table_postgres() {
    assert_eq!(
        create_table(Dialect::Postgres, &foo_users()),
        r#"CREATE TABLE IF NOT EXISTS "foo"."users" ("id"   SERIAL , "mood" "foo"."enum_users_mood", PRIMARY KEY ("id"));"#
    );
}

#[test]
fn enum_table_mysql_family() {
    let expected = "CREATE TABLE IF NOT EXISTS `foo`.`users` (`id` INTEGER NOT NULL auto_increment , `mood` ENUM('happy', 'sad'), PRIMARY KEY (`id`)) ENGINE=InnoDB;";
    assert_eq!(create_table(Dialect::Mysql, &foo_users()), expected);
    assert_eq!(create_table(Dialect::Mariadb, &foo_users()), expected);
}

#[test]
fn enum_table_mssql() {
    assert_eq!(
        create_table(Dialect::Mssql, &foo_users()),
        "IF OBJECT_ID('[foo].[users]', 'U') IS NULL CREATE TABLE [foo].[users] ([id] INTEGER NOT NULL IDENTITY(1,1) , [mood] VARCHAR(255) CHECK ([mood] IN(N'happy', N'sad')), PRIMARY KEY ([id]));"
    );
}

#[test]
fn enum_table_ibmi() {
    assert_eq!(
        create_table(Dialect::Ibmi, &foo_users()),
        "BEGIN\n    DECLARE CONTINUE HANDLER FOR SQLSTATE VALUE '42710'\n      BEGIN END;\n      CREATE TABLE \"foo\".\"users\" (\"id\" INTEGER NOT NULL GENERATED BY DEFAULT AS IDENTITY (START WITH 1, INCREMENT BY 1) , \"mood\" VARCHAR(255) CHECK (\"mood\" IN('happy', 'sad')), PRIMARY KEY (\"id\"));\n      END"
    );
}

// Foreign key with referential actions

#[test]
fn references_sqlite() {
    assert_eq!(
        create_table(Dialect::Sqlite, &bar_projects()),
        "CREATE TABLE IF NOT EXISTS `bar.projects` (`id` INTEGER PRIMARY KEY AUTOINCREMENT, `user_id` INTEGER REFERENCES `bar.users` (`id`) ON DELETE NO ACTION ON UPDATE CASCADE);"
    );
}

#[test]
fn references_db2() {
    assert_eq!(
        create_table(Dialect::Db2, &bar_projects()),
        r#"CREATE TABLE IF NOT EXISTS "bar"."projects" ("id" INTEGER NOT NULL GENERATED BY DEFAULT AS IDENTITY(START WITH 1, INCREMENT BY 1) , "user_id" INTEGER, PRIMARY KEY ("id"), FOREIGN KEY ("user_id") REFERENCES "bar"."users" ("id") ON DELETE NO ACTION);"#
    );
}

#[test]
fn references_postgres() {
    assert_eq!(
        create_table(Dialect::Postgres, &bar_projects()),
        r#"CREATE TABLE IF NOT EXISTS "bar"."projects" ("id"   SERIAL , "user_id" INTEGER REFERENCES "bar"."users" ("id") ON DELETE NO ACTION ON UPDATE CASCADE, PRIMARY KEY ("id"));"#
    );
}

#[test]
fn references_mysql_family() {
    let expected = "CREATE TABLE IF NOT EXISTS `bar`.`projects` (`id` INTEGER NOT NULL auto_increment , `user_id` INTEGER, PRIMARY KEY (`id`), FOREIGN KEY (`user_id`) REFERENCES `bar`.`users` (`id`) ON DELETE NO ACTION ON UPDATE CASCADE) ENGINE=InnoDB;";
    assert_eq!(create_table(Dialect::Mysql, &bar_projects()), expected);
    assert_eq!(create_table(Dialect::Mariadb, &bar_projects()), expected);
}

#[test]
fn references_mssql() {
    assert_eq!(
        create_table(Dialect::Mssql, &bar_projects()),
        "IF OBJECT_ID('[bar].[projects]', 'U') IS NULL CREATE TABLE [bar].[projects] ([id] INTEGER NOT NULL IDENTITY(1,1) , [user_id] INTEGER NULL, PRIMARY KEY ([id]), FOREIGN KEY ([user_id]) REFERENCES [bar].[users] ([id]) ON DELETE NO ACTION);"
    );
}

#[test]
fn references_ibmi() {
    assert_eq!(
        create_table(Dialect::Ibmi, &bar_projects()),
        "BEGIN\n    DECLARE CONTINUE HANDLER FOR SQLSTATE VALUE '42710'\n      BEGIN END;\n      CREATE TABLE \"bar\".\"projects\" (\"id\" INTEGER NOT NULL GENERATED BY DEFAULT AS IDENTITY (START WITH 1, INCREMENT BY 1) , \"user_id\" INTEGER REFERENCES \"bar\".\"users\" (\"id\") ON DELETE NO ACTION, PRIMARY KEY (\"id\"));\n      END"
    );
}

// Primary key that is also a foreign key

#[test]
fn primary_key_reference_sqlite() {
    assert_eq!(
        create_table(Dialect::Sqlite, &images()),
        "CREATE TABLE IF NOT EXISTS `images` (`id` INTEGER PRIMARY KEY AUTOINCREMENT REFERENCES `files` (`id`));"
    );
}

#[test]
fn primary_key_reference_postgres() {
    assert_eq!(
        create_table(Dialect::Postgres, &images()),
        r#"CREATE TABLE IF NOT EXISTS "images" ("id"  SERIAL  REFERENCES "files" ("id"), PRIMARY KEY ("id"));"#
    );
}

#[test]
fn primary_key_reference_db2() {
    assert_eq!(
        create_table(Dialect::Db2, &images()),
        r#"CREATE TABLE IF NOT EXISTS "images" ("id" INTEGER NOT NULL GENERATED BY DEFAULT AS IDENTITY(START WITH 1, INCREMENT BY 1) , PRIMARY KEY ("id"), FOREIGN KEY ("id") REFERENCES "files" ("id"));"#
    );
}

#[test]
fn primary_key_reference_mysql_family() {
    let expected = "CREATE TABLE IF NOT EXISTS `images` (`id` INTEGER auto_increment , PRIMARY KEY (`id`), FOREIGN KEY (`id`) REFERENCES `files` (`id`)) ENGINE=InnoDB;";
    assert_eq!(create_table(Dialect::Mysql, &images()), expected);
    assert_eq!(create_table(Dialect::Mariadb, &images()), expected);
}

#[test]
fn primary_key_reference_mssql() {
    assert_eq!(
        create_table(Dialect::Mssql, &images()),
        "IF OBJECT_ID('[images]', 'U') IS NULL CREATE TABLE [images] ([id] INTEGER IDENTITY(1,1) , PRIMARY KEY ([id]), FOREIGN KEY ([id]) REFERENCES [files] ([id]));"
    );
}

#[test]
fn primary_key_reference_ibmi() {
    assert_eq!(
        create_table(Dialect::Ibmi, &images()),
        "BEGIN\n    DECLARE CONTINUE HANDLER FOR SQLSTATE VALUE '42710'\n      BEGIN END;\n      CREATE TABLE \"images\" (\"id\" INTEGER GENERATED BY DEFAULT AS IDENTITY (START WITH 1, INCREMENT BY 1)  REFERENCES \"files\" (\"id\"), PRIMARY KEY (\"id\"));\n      END"
    );
}

// Version gate

#[test]
fn postgres_9_0_omits_if_not_exists() {
    assert_eq!(
        create_table_at(Dialect::Postgres, "9.0.0", &foo_users()),
        r#"CREATE TABLE "foo"."users" ("id"   SERIAL , "mood" "foo"."enum_users_mood", PRIMARY KEY ("id"));"#
    );
}

#[test]
fn postgres_9_1_and_unknown_use_if_not_exists() {
    let expected = r#"CREATE TABLE IF NOT EXISTS "foo"."users" ("id"   SERIAL , "mood" "foo"."enum_users_mood", PRIMARY KEY ("id"));"#;
    assert_eq!(create_table_at(Dialect::Postgres, "9.1.0", &foo_users()), expected);
    assert_eq!(
        create_table_with(
            &QueryGenerator::new(Dialect::Postgres).with_database_version(0_u64),
            &foo_users()
        ),
        expected
    );
}

#[test]
fn version_change_applies_to_later_calls() {
    let mut generator = QueryGenerator::new(Dialect::Postgres);
    let before = create_table_with(&generator, &foo_users());
    generator.set_database_version(9_u64);
    let after = create_table_with(&generator, &foo_users());
    assert!(before.starts_with("CREATE TABLE IF NOT EXISTS "));
    assert!(after.starts_with("CREATE TABLE \"foo\""));
}

#[test]
fn structural_guards_ignore_version() {
    let mssql = create_table_at(Dialect::Mssql, "9.0.0", &foo_users());
    assert!(mssql.starts_with("IF OBJECT_ID('[foo].[users]', 'U') IS NULL CREATE TABLE "));
    let ibmi = create_table_at(Dialect::Ibmi, "7.1.0", &foo_users());
    assert!(ibmi.starts_with("BEGIN\n    DECLARE CONTINUE HANDLER"));
}

// General behavior

#[test]
fn generation_is_deterministic() {
    for dialect in Dialect::ALL {
        assert_eq!(create_table(dialect, &bar_projects()), create_table(dialect, &bar_projects()));
    }
}

#[test]
fn columns_keep_declaration_order() {
    let table = TableDefinition::builder("people")
        .column(string("zeta").build())
        .column(string("alpha").build())
        .timestamps(false)
        .build();

    for dialect in Dialect::ALL {
        let generator = QueryGenerator::new(dialect);
        let sql = create_table_with(&generator, &table);
        let positions: Vec<usize> = ["id", "zeta", "alpha"]
            .iter()
            .map(|name| {
                let column = format!("{} ", generator.quote_identifier(name));
                sql.find(&column)
                    .unwrap_or_else(|| panic!("{dialect}: {column} missing from {sql}"))
            })
            .collect();
        assert!(
            positions.windows(2).all(|pair| pair[0] < pair[1]),
            "{dialect}: columns out of order in {sql}"
        );
    }
}

// Keywords inside quoted values

#[test]
fn primary_key_text_in_default_postgres() {
    let table = TableDefinition::builder("things")
        .column(string("kind").default_value("PRIMARY KEY").build())
        .timestamps(false)
        .build();
    assert_eq!(
        create_table(Dialect::Postgres, &table),
        r#"CREATE TABLE IF NOT EXISTS "things" ("id"   SERIAL , "kind" VARCHAR(255) DEFAULT 'PRIMARY KEY', PRIMARY KEY ("id"));"#
    );
}

#[test]
fn primary_key_text_in_default_sqlite() {
    let table = TableDefinition::builder("things")
        .column(string("kind").default_value("PRIMARY KEY").build())
        .timestamps(false)
        .build();
    assert_eq!(
        create_table(Dialect::Sqlite, &table),
        "CREATE TABLE IF NOT EXISTS `things` (`id` INTEGER PRIMARY KEY AUTOINCREMENT, `kind` VARCHAR(255) DEFAULT 'PRIMARY KEY');"
    );
}

#[test]
fn references_text_in_comment_mysql() {
    let table = TableDefinition::builder("counters")
        .column(integer("n").comment("x REFERENCES y").build())
        .timestamps(false)
        .build();
    assert_eq!(
        create_table(Dialect::Mysql, &table),
        "CREATE TABLE IF NOT EXISTS `counters` (`id` INTEGER NOT NULL auto_increment , `n` INTEGER COMMENT 'x REFERENCES y', PRIMARY KEY (`id`)) ENGINE=InnoDB;"
    );
}

#[test]
fn real_reference_after_keyword_comment_mysql() {
    let table = TableDefinition::builder("projects")
        .column(
            integer("owner_id")
                .comment("PRIMARY KEY REFERENCES owner")
                .references(ForeignKeyRef::new("users"))
                .build(),
        )
        .timestamps(false)
        .build();
    let sql = create_table(Dialect::Mysql, &table);
    assert!(sql.contains("`owner_id` INTEGER COMMENT 'PRIMARY KEY REFERENCES owner', PRIMARY KEY (`id`), FOREIGN KEY (`owner_id`) REFERENCES `users` (`id`))"), "{sql}");
}

#[test]
fn escaped_quote_in_default_mysql() {
    let table = TableDefinition::builder("people")
        .column(string("owner").default_value("O'Brien PRIMARY KEY").build())
        .timestamps(false)
        .build();
    assert_eq!(
        create_table(Dialect::Mysql, &table),
        r"CREATE TABLE IF NOT EXISTS `people` (`id` INTEGER NOT NULL auto_increment , `owner` VARCHAR(255) DEFAULT 'O\'Brien PRIMARY KEY', PRIMARY KEY (`id`)) ENGINE=InnoDB;"
    );
}

#[test]
fn timestamps_are_appended() {
    let table = TableDefinition::builder("events").build();
    assert_eq!(
        create_table(Dialect::Postgres, &table),
        r#"CREATE TABLE IF NOT EXISTS "events" ("id"   SERIAL , "createdAt" TIMESTAMP WITH TIME ZONE NOT NULL, "updatedAt" TIMESTAMP WITH TIME ZONE NOT NULL, PRIMARY KEY ("id"));"#
    );
}

#[test]
fn sqlite_composite_primary_key() {
    let table = TableDefinition::builder("memberships")
        .column(integer("a").not_null().primary_key().build())
        .column(integer("b").primary_key().build())
        .timestamps(false)
        .build();
    assert_eq!(
        create_table(Dialect::Sqlite, &table),
        "CREATE TABLE IF NOT EXISTS `memberships` (`a` INTEGER NOT NULL, `b` INTEGER NOT NULL, PRIMARY KEY (`a`, `b`));"
    );
}

#[test]
fn postgres_composite_primary_key() {
    let table = TableDefinition::builder("memberships")
        .column(integer("a").not_null().primary_key().build())
        .column(integer("b").primary_key().build())
        .timestamps(false)
        .build();
    assert_eq!(
        create_table(Dialect::Postgres, &table),
        r#"CREATE TABLE IF NOT EXISTS "memberships" ("a" INTEGER NOT NULL , "b" INTEGER , PRIMARY KEY ("a","b"));"#
    );
}

#[test]
fn snowflake_enum_table() {
    assert_eq!(
        create_table(Dialect::Snowflake, &foo_users()),
        r#"CREATE TABLE IF NOT EXISTS "foo"."users" ("id" INTEGER NOT NULL AUTOINCREMENT , "mood" VARCHAR(255), PRIMARY KEY ("id"));"#
    );
}

#[test]
fn mysql_table_options() {
    let table = TableDefinition::builder("people")
        .column(string("email").build())
        .timestamps(false)
        .build();
    let generator = QueryGenerator::new(Dialect::Mysql);
    let columns = generator.attributes_to_sql(&table).unwrap();
    let options = CreateTableOptions {
        unique_keys: vec![UniqueKey::new(["email"]).named("uq_email")],
        engine: Some("MyISAM".to_string()),
        comment: Some("people".to_string()),
        charset: Some("utf8mb4".to_string()),
        collate: Some("utf8mb4_bin".to_string()),
        initial_auto_increment: Some(100),
        row_format: Some("DYNAMIC".to_string()),
    };
    assert_eq!(
        generator.create_table_query(table.table_ref(), &columns, &options),
        "CREATE TABLE IF NOT EXISTS `people` (`id` INTEGER NOT NULL auto_increment , `email` VARCHAR(255), CONSTRAINT `uq_email` UNIQUE (`email`), PRIMARY KEY (`id`)) ENGINE=MyISAM COMMENT 'people' DEFAULT CHARSET=utf8mb4 COLLATE utf8mb4_bin AUTO_INCREMENT=100 ROW_FORMAT=DYNAMIC;"
    );
}

#[test]
fn postgres_table_comment() {
    let table = TableDefinition::builder("people")
        .column(string("email").build())
        .timestamps(false)
        .build();
    let generator = QueryGenerator::new(Dialect::Postgres);
    let columns = generator.attributes_to_sql(&table).unwrap();
    let options = CreateTableOptions {
        comment: Some("people".to_string()),
        ..CreateTableOptions::default()
    };
    assert_eq!(
        generator.create_table_query(table.table_ref(), &columns, &options),
        r#"CREATE TABLE IF NOT EXISTS "people" ("id"   SERIAL , "email" VARCHAR(255), PRIMARY KEY ("id")); COMMENT ON TABLE "people" IS 'people';"#
    );
}

#[test]
fn postgres_statements_create_enum_types_first() {
    let generator = QueryGenerator::new(Dialect::Postgres);
    let statements = generator
        .create_table_statements(&foo_users(), &CreateTableOptions::default())
        .unwrap();
    assert_eq!(
        statements,
        [
            r#"CREATE TYPE "foo"."enum_users_mood" AS ENUM('happy', 'sad');"#.to_string(),
            create_table(Dialect::Postgres, &foo_users()),
        ]
    );

    let mysql = QueryGenerator::new(Dialect::Mysql)
        .create_table_statements(&foo_users(), &CreateTableOptions::default())
        .unwrap();
    assert_eq!(mysql.len(), 1);
}

#[test]
fn table_engine_is_used_by_statements() {
    let table = TableDefinition::builder("logs")
        .engine("MyISAM")
        .timestamps(false)
        .build();
    let statements = QueryGenerator::new(Dialect::Mariadb)
        .create_table_statements(&table, &CreateTableOptions::default())
        .unwrap();
    assert_eq!(
        statements,
        ["CREATE TABLE IF NOT EXISTS `logs` (`id` INTEGER NOT NULL auto_increment , PRIMARY KEY (`id`)) ENGINE=MyISAM;"]
    );
}

#[test]
fn drop_table_guards() {
    let table = TableRef::new("users").with_schema("foo");
    let cascade = DropTableOptions { cascade: true };

    assert_eq!(
        QueryGenerator::new(Dialect::Postgres).drop_table_query(&table, &cascade),
        r#"DROP TABLE IF EXISTS "foo"."users" CASCADE;"#
    );
    assert_eq!(
        QueryGenerator::new(Dialect::Mysql).drop_table_query(&table, &cascade),
        "DROP TABLE IF EXISTS `foo`.`users`;"
    );
    assert_eq!(
        QueryGenerator::new(Dialect::Mssql).drop_table_query(&table, &DropTableOptions::default()),
        "IF OBJECT_ID('[foo].[users]', 'U') IS NOT NULL DROP TABLE [foo].[users];"
    );
    assert_eq!(
        QueryGenerator::new(Dialect::Ibmi).drop_table_query(&table, &DropTableOptions::default()),
        "BEGIN\n    DECLARE CONTINUE HANDLER FOR SQLSTATE VALUE '42704'\n      BEGIN END;\n      DROP TABLE \"foo\".\"users\";\n      END"
    );
}

#[test]
fn table_definition_from_json() {
    let json = r#"{
        "name": "users",
        "schema": "foo",
        "columns": [{ "name": "mood", "type": { "enum": ["happy", "sad"] } }],
        "options": { "timestamps": false }
    }"#;
    let table: TableDefinition = serde_json::from_str(json).unwrap();
    assert_eq!(table.primary_keys(), ["id"]);
    assert_eq!(
        table.column("mood").map(|c| &c.data_type),
        Some(&DataType::enumeration(["happy", "sad"]))
    );
    assert_eq!(create_table(Dialect::Mysql, &table), create_table(Dialect::Mysql, &foo_users()));
}
