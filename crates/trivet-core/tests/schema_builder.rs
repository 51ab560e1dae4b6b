use pretty_assertions::assert_eq;

use trivet_core::{
    schema::{Field, FieldType, Rule, Schema},
    stmt::Value,
};

#[test]
fn id_field_defaults_to_id() {
    let schema = Schema::builder("users").build();
    assert_eq!(schema.id_field(), "id");
    assert!(!schema.quote_table());
}

#[test]
fn builder_overrides_stick() {
    let schema = Schema::builder("users")
        .id_field("user_id")
        .quote_table()
        .field("user_id", Field::new())
        .field("name", Field::new().quote())
        .build();

    assert_eq!(schema.table(), "users");
    assert_eq!(schema.id_field(), "user_id");
    assert!(schema.quote_table());
    assert!(schema.field("name").map(|f| f.quote).unwrap_or(false));
}

#[test]
fn fields_iterate_in_declaration_order() {
    let schema = Schema::builder("users")
        .field("id", Field::new())
        .field("name", Field::new())
        .field("email", Field::new())
        .build();

    let names: Vec<_> = schema.field_names().collect();
    assert_eq!(names, ["id", "name", "email"]);
    assert!(schema.contains_field("email"));
    assert!(!schema.contains_field("nickname"));
}

#[test]
fn clones_share_the_descriptor_set() {
    let schema = Schema::builder("users").field("id", Field::new()).build();
    let clone = schema.clone();

    assert_eq!(clone.table(), schema.table());
    assert!(clone.contains_field("id"));
}

#[test]
fn static_and_produced_defaults() {
    let field = Field::new().default_value("pending");
    let default = field.default.as_ref().unwrap();
    assert_eq!(default.produce(), Value::String("pending".into()));
    assert_eq!(default.produce(), Value::String("pending".into()));

    let field = Field::new().default_with(|| Value::I64(7));
    assert_eq!(field.default.as_ref().unwrap().produce(), Value::I64(7));
}

#[test]
fn type_union_matches_any_member() {
    let rule = Rule::new().ty(FieldType::Integer).ty(FieldType::Null);

    assert!(rule.types.iter().any(|ty| ty.matches(&Value::I64(1))));
    assert!(rule.types.iter().any(|ty| ty.matches(&Value::Null)));
    assert!(!rule.types.iter().any(|ty| ty.matches(&Value::Bool(true))));
}

#[test]
fn number_accepts_integers_and_floats() {
    assert!(FieldType::Number.matches(&Value::I64(1)));
    assert!(FieldType::Number.matches(&Value::F64(1.5)));
    assert!(!FieldType::Number.matches(&Value::String("1".into())));
}
