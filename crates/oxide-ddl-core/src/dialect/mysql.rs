//! MySQL and MariaDB descriptors.
//!
//! Both move keys and references to trailing table constraints and append
//! a storage engine. They differ only in name.

use super::{
    ConstraintPlacement, DefaultRestriction, DialectDescriptor, EnumStrategy, ExistenceGuard,
    IdentityPlacement, SchemaQualification, StringEscape, TableCommentStyle, TypeNames,
};

const MYSQL_TYPES: TypeNames = TypeNames {
    integer: "INTEGER",
    bigint: "BIGINT",
    smallint: "SMALLINT",
    float: "FLOAT",
    double: "DOUBLE PRECISION",
    varchar: "VARCHAR",
    char: "CHAR",
    text: "TEXT",
    boolean: "TINYINT(1)",
    date: "DATETIME",
    date_only: "DATE",
    time: "TIME",
    uuid: "CHAR(36) BINARY",
    json: "JSON",
    blob: "BLOB",
    enum_fallback: "VARCHAR(255)",
};

const MYSQL_DESCRIPTOR: DialectDescriptor = DialectDescriptor {
    name: "mysql",
    quotes: ('`', '`'),
    schema_qualification: SchemaQualification::Separate,
    string_prefix: "",
    string_escape: StringEscape::Backslash,
    boolean_literals: ("true", "false"),
    types: MYSQL_TYPES,
    identity_template: " auto_increment",
    identity_placement: IdentityPlacement::AfterNullability,
    serial_types: false,
    enum_strategy: EnumStrategy::NativeColumnType,
    primary_key_placement: ConstraintPlacement::Trailing,
    primary_key_separator: ", ",
    foreign_key_placement: ConstraintPlacement::Trailing,
    supports_on_update: true,
    self_reference_actions: true,
    not_null_for_keys: false,
    explicit_null: false,
    inline_comments: true,
    default_restriction: DefaultRestriction::TextBlobAndJson,
    existence_guard: ExistenceGuard::IfNotExists,
    if_not_exists_since: None,
    default_engine: Some("InnoDB"),
    table_comments: TableCommentStyle::TableOption,
    supports_drop_cascade: false,
};

pub(super) static MYSQL: DialectDescriptor = MYSQL_DESCRIPTOR;

pub(super) static MARIADB: DialectDescriptor = DialectDescriptor {
    name: "mariadb",
    ..MYSQL_DESCRIPTOR
};

#[cfg(test)]
mod tests {
    use crate::dialect::Dialect;
    use crate::schema::DataType;

    #[test]
    fn test_mariadb_matches_mysql() {
        let mysql = Dialect::Mysql.descriptor();
        let mariadb = Dialect::Mariadb.descriptor();
        assert_eq!(mariadb.name, "mariadb");
        assert_eq!(mariadb.quotes, mysql.quotes);
        assert_eq!(mariadb.default_engine, Some("InnoDB"));
        assert_eq!(
            mariadb.type_name(&DataType::Uuid),
            mysql.type_name(&DataType::Uuid)
        );
    }
}
