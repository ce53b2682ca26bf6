//! SQLite descriptor.
//!
//! SQLite keeps `PRIMARY KEY` and `REFERENCES` inside the column, places
//! `AUTOINCREMENT` after the key, and has no schemas of its own: a schema
//! name becomes part of the table identifier.

use super::{
    ConstraintPlacement, DefaultRestriction, DialectDescriptor, EnumStrategy, ExistenceGuard,
    IdentityPlacement, SchemaQualification, StringEscape, TableCommentStyle, TypeNames,
};

pub(super) static SQLITE: DialectDescriptor = DialectDescriptor {
    name: "sqlite",
    quotes: ('`', '`'),
    schema_qualification: SchemaQualification::Joined,
    string_prefix: "",
    string_escape: StringEscape::DoubledQuote,
    boolean_literals: ("1", "0"),
    types: TypeNames {
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
        uuid: "UUID",
        json: "JSON",
        blob: "BLOB",
        enum_fallback: "TEXT",
    },
    identity_template: " AUTOINCREMENT",
    identity_placement: IdentityPlacement::AfterPrimaryKey,
    serial_types: false,
    enum_strategy: EnumStrategy::PlainString,
    primary_key_placement: ConstraintPlacement::Inline,
    primary_key_separator: ", ",
    foreign_key_placement: ConstraintPlacement::Inline,
    supports_on_update: true,
    self_reference_actions: true,
    not_null_for_keys: false,
    explicit_null: false,
    inline_comments: false,
    default_restriction: DefaultRestriction::None,
    existence_guard: ExistenceGuard::IfNotExists,
    if_not_exists_since: None,
    default_engine: None,
    table_comments: TableCommentStyle::Unsupported,
    supports_drop_cascade: false,
};
