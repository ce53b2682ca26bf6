//! Db2 (LUW) and Db2 for IBM i descriptors.
//!
//! Db2 LUW accepts `IF NOT EXISTS`, forces `NOT NULL` on key columns and
//! moves references to the end of the table. IBM i keeps references
//! inline and guards creation with a handler for SQLSTATE 42710.

use super::{
    ConstraintPlacement, DefaultRestriction, DialectDescriptor, EnumStrategy, ExistenceGuard,
    IdentityPlacement, SchemaQualification, StringEscape, TableCommentStyle, TypeNames,
};

const DB2_DESCRIPTOR: DialectDescriptor = DialectDescriptor {
    name: "db2",
    quotes: ('"', '"'),
    schema_qualification: SchemaQualification::Separate,
    string_prefix: "",
    string_escape: StringEscape::DoubledQuote,
    boolean_literals: ("true", "false"),
    types: TypeNames {
        integer: "INTEGER",
        bigint: "BIGINT",
        smallint: "SMALLINT",
        float: "REAL",
        double: "DOUBLE",
        varchar: "VARCHAR",
        char: "CHAR",
        text: "CLOB(2147483647)",
        boolean: "BOOLEAN",
        date: "TIMESTAMP",
        date_only: "DATE",
        time: "TIME",
        uuid: "CHAR(36) FOR BIT DATA",
        json: "CLOB(2147483647)",
        blob: "BLOB(1M)",
        enum_fallback: "VARCHAR(255)",
    },
    identity_template: " GENERATED BY DEFAULT AS IDENTITY(START WITH {start}, INCREMENT BY {increment})",
    identity_placement: IdentityPlacement::AfterNullability,
    serial_types: false,
    enum_strategy: EnumStrategy::CheckConstraint { terminal: false },
    primary_key_placement: ConstraintPlacement::Trailing,
    primary_key_separator: ", ",
    foreign_key_placement: ConstraintPlacement::Trailing,
    supports_on_update: false,
    self_reference_actions: true,
    not_null_for_keys: true,
    explicit_null: false,
    inline_comments: false,
    default_restriction: DefaultRestriction::None,
    existence_guard: ExistenceGuard::IfNotExists,
    if_not_exists_since: None,
    default_engine: None,
    table_comments: TableCommentStyle::Unsupported,
    supports_drop_cascade: false,
};

pub(super) static DB2: DialectDescriptor = DB2_DESCRIPTOR;

pub(super) static IBMI: DialectDescriptor = DialectDescriptor {
    name: "ibmi",
    boolean_literals: ("1", "0"),
    types: TypeNames {
        boolean: "SMALLINT",
        uuid: "CHAR(36)",
        ..DB2_DESCRIPTOR.types
    },
    identity_template: " GENERATED BY DEFAULT AS IDENTITY (START WITH {start}, INCREMENT BY {increment})",
    foreign_key_placement: ConstraintPlacement::Inline,
    not_null_for_keys: false,
    existence_guard: ExistenceGuard::DuplicateObjectHandler,
    ..DB2_DESCRIPTOR
};
