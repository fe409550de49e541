//! Default definition snippets for missing fields.

use crate::naming::{camelize, pluralize};
use crate::schema::{ColumnFact, ColumnType};

/// Snippet for a missing property. Enum fields sample their mapping keys;
/// everything else is chosen by storage type.
pub fn generate(column: &ColumnFact, enum_fields: &[&str], model_type_name: &str) -> String {
    let name = column.name.as_str();
    if enum_fields.contains(&name) {
        return format!(
            "{name} {{ {model_type_name}.{}.keys.sample }}",
            pluralize(name)
        );
    }

    match column.column_type {
        ColumnType::Integer | ColumnType::Float | ColumnType::Decimal => {
            format!("sequence(:{name}) {{ _1 }}")
        }
        ColumnType::String | ColumnType::Text => {
            format!("sequence(:{name}) {{ \"{} #{{_1}}\" }}", camelize(name))
        }
        ColumnType::Datetime | ColumnType::Timestamp | ColumnType::Time => {
            format!("{name} {{ Time.zone.now }}")
        }
        ColumnType::Date => format!("{name} {{ Date.today }}"),
        ColumnType::Boolean => format!("{name} {{ [true, false].sample }}"),
        ColumnType::Json | ColumnType::Jsonb => format!("{name} {{ JSON.parse('{{}}') }}"),
        ColumnType::Binary | ColumnType::References | ColumnType::Other(_) => {
            format!("{name} {{ }}")
        }
    }
}

/// Inline association definition for a missing `belongs_to`.
pub fn generate_association(name: &str) -> String {
    format!("{name} {{ association :{name} }}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, column_type: ColumnType) -> ColumnFact {
        ColumnFact {
            name: name.to_string(),
            column_type,
            nullable: true,
        }
    }

    #[test]
    fn string_columns_get_unique_sequences() {
        assert_eq!(
            generate(&column("email", ColumnType::String), &[], "User"),
            "sequence(:email) { \"Email #{_1}\" }"
        );
        assert_eq!(
            generate(&column("first_name", ColumnType::Text), &[], "User"),
            "sequence(:first_name) { \"FirstName #{_1}\" }"
        );
    }

    #[test]
    fn enum_membership_wins_over_storage_type() {
        assert_eq!(
            generate(&column("role", ColumnType::Integer), &["role"], "User"),
            "role { User.roles.keys.sample }"
        );
        assert_eq!(
            generate(&column("status", ColumnType::String), &["status"], "Admin::Order"),
            "status { Admin::Order.statuses.keys.sample }"
        );
    }

    #[test]
    fn storage_type_table() {
        let cases = [
            (ColumnType::Integer, "sequence(:x) { _1 }"),
            (ColumnType::Decimal, "sequence(:x) { _1 }"),
            (ColumnType::Datetime, "x { Time.zone.now }"),
            (ColumnType::Time, "x { Time.zone.now }"),
            (ColumnType::Date, "x { Date.today }"),
            (ColumnType::Boolean, "x { [true, false].sample }"),
            (ColumnType::Jsonb, "x { JSON.parse('{}') }"),
            (ColumnType::Binary, "x { }"),
            (ColumnType::Other("uuid".into()), "x { }"),
        ];
        for (column_type, expected) in cases {
            assert_eq!(generate(&column("x", column_type), &[], "Thing"), expected);
        }
    }

    #[test]
    fn associations_use_inline_form() {
        assert_eq!(generate_association("profile"), "profile { association :profile }");
    }
}
