//! Microsoft SQL Server descriptor.

use super::{
    ConstraintPlacement, DefaultRestriction, DialectDescriptor, EnumStrategy, ExistenceGuard,
    IdentityPlacement, SchemaQualification, StringEscape, TableCommentStyle, TypeNames,
};

pub(super) static MSSQL: DialectDescriptor = DialectDescriptor {
    name: "mssql",
    quotes: ('[', ']'),
    schema_qualification: SchemaQualification::Separate,
    string_prefix: "N",
    string_escape: StringEscape::DoubledQuote,
    boolean_literals: ("1", "0"),
    types: TypeNames {
        integer: "INTEGER",
        bigint: "BIGINT",
        smallint: "SMALLINT",
        float: "FLOAT",
        double: "FLOAT(53)",
        varchar: "NVARCHAR",
        char: "NCHAR",
        text: "NVARCHAR(MAX)",
        boolean: "BIT",
        date: "DATETIMEOFFSET",
        date_only: "DATE",
        time: "TIME",
        uuid: "UNIQUEIDENTIFIER",
        json: "NVARCHAR(MAX)",
        blob: "VARBINARY(MAX)",
        enum_fallback: "VARCHAR(255)",
    },
    identity_template: " IDENTITY({start},{increment})",
    identity_placement: IdentityPlacement::AfterNullability,
    serial_types: false,
    enum_strategy: EnumStrategy::CheckConstraint { terminal: true },
    primary_key_placement: ConstraintPlacement::Trailing,
    primary_key_separator: ", ",
    foreign_key_placement: ConstraintPlacement::Trailing,
    supports_on_update: false,
    self_reference_actions: false,
    not_null_for_keys: false,
    explicit_null: true,
    inline_comments: false,
    default_restriction: DefaultRestriction::TextAndBlob,
    existence_guard: ExistenceGuard::ObjectIdCheck,
    if_not_exists_since: None,
    default_engine: None,
    table_comments: TableCommentStyle::Unsupported,
    supports_drop_cascade: false,
};

#[cfg(test)]
mod tests {
    use crate::dialect::Dialect;
    use crate::schema::DataType;

    #[test]
    fn test_mssql_types() {
        let d = Dialect::Mssql.descriptor();
        assert_eq!(d.type_name(&DataType::string()), "NVARCHAR(255)");
        assert_eq!(d.type_name(&DataType::Boolean), "BIT");
        assert_eq!(d.type_name(&DataType::Uuid), "UNIQUEIDENTIFIER");
        assert_eq!(d.type_name(&DataType::enumeration(["x"])), "VARCHAR(255)");
    }
}
