//! Snowflake descriptor.

use super::{
    ConstraintPlacement, DefaultRestriction, DialectDescriptor, EnumStrategy, ExistenceGuard,
    IdentityPlacement, SchemaQualification, StringEscape, TableCommentStyle, TypeNames,
};

pub(super) static SNOWFLAKE: DialectDescriptor = DialectDescriptor {
    name: "snowflake",
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
        date: "TIMESTAMP",
        date_only: "DATE",
        time: "TIME",
        uuid: "VARCHAR(36)",
        json: "VARIANT",
        blob: "BINARY",
        enum_fallback: "VARCHAR(255)",
    },
    identity_template: " AUTOINCREMENT",
    identity_placement: IdentityPlacement::AfterNullability,
    serial_types: false,
    enum_strategy: EnumStrategy::PlainString,
    primary_key_placement: ConstraintPlacement::Trailing,
    primary_key_separator: ", ",
    foreign_key_placement: ConstraintPlacement::Trailing,
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
    supports_drop_cascade: true,
};
