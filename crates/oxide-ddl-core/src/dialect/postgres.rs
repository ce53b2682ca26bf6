//! PostgreSQL descriptor.
//!
//! Enums are named types created ahead of the table, auto-increment
//! integer keys become `SERIAL` types, and `IF NOT EXISTS` needs 9.1.

use super::{
    ConstraintPlacement, DefaultRestriction, DialectDescriptor, EnumStrategy, ExistenceGuard,
    IdentityPlacement, SchemaQualification, StringEscape, TableCommentStyle, TypeNames,
};

pub(super) static POSTGRES: DialectDescriptor = DialectDescriptor {
    name: "postgres",
    quotes: ('"', '"'),
    schema_qualification: SchemaQualification::Separate,
    string_prefix: "",
    string_escape: StringEscape::DoubledQuote,
    boolean_literals: ("true", "false"),
    types: TypeNames {
        integer: "INTEGER",
        bigint: "BIGINT",
        smallint: "SMALLINT",
        float: "FLOAT",
        double: "DOUBLE PRECISION",
        varchar: "VARCHAR",
        char: "CHAR",
        text: "TEXT",
        boolean: "BOOLEAN",
        date: "TIMESTAMP WITH TIME ZONE",
        date_only: "DATE",
        time: "TIME",
        uuid: "UUID",
        json: "JSON",
        blob: "BYTEA",
        enum_fallback: "VARCHAR(255)",
    },
    identity_template: " SERIAL",
    identity_placement: IdentityPlacement::AfterNullability,
    serial_types: true,
    enum_strategy: EnumStrategy::NamedType,
    primary_key_placement: ConstraintPlacement::Trailing,
    primary_key_separator: ",",
    foreign_key_placement: ConstraintPlacement::Inline,
    supports_on_update: true,
    self_reference_actions: true,
    not_null_for_keys: false,
    explicit_null: false,
    inline_comments: false,
    default_restriction: DefaultRestriction::None,
    existence_guard: ExistenceGuard::IfNotExists,
    if_not_exists_since: Some((9, 1, 0)),
    default_engine: None,
    table_comments: TableCommentStyle::CommentOn,
    supports_drop_cascade: true,
};
