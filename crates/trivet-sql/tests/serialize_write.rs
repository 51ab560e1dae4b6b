use pretty_assertions::assert_eq;

use trivet_core::{
    schema::{Field, Schema},
    stmt::{Assignments, Delete, Insert, Predicate, Statement, Update, Value},
};
use trivet_sql::Serializer;

fn schema() -> Schema {
    Schema::builder("users")
        .field("id", Field::new())
        .field("name", Field::new())
        .field("email", Field::new())
        .field("key", Field::new().quote())
        .build()
}

fn serialize(stmt: impl Into<Statement>) -> (String, Vec<Value>) {
    let stmt = stmt.into();
    let mut params = Vec::new();
    let sql = Serializer::new(&schema())
        .serialize(&stmt, &mut params)
        .unwrap();
    (sql, params)
}

#[test]
fn insert_lists_columns_and_placeholders() {
    let assignments: Assignments = [("name", "Bob"), ("email", "bob@example.com")]
        .into_iter()
        .collect();

    let (sql, params) = serialize(Insert { assignments });
    assert_eq!(sql, "INSERT INTO users (name, email) VALUES (?, ?)");
    assert_eq!(
        params,
        vec![Value::from("Bob"), Value::from("bob@example.com")]
    );
}

#[test]
fn insert_quotes_flagged_columns() {
    let mut assignments = Assignments::new();
    assignments.set("key", "abc");

    let (sql, _) = serialize(Insert { assignments });
    assert_eq!(sql, "INSERT INTO users (`key`) VALUES (?)");
}

#[test]
fn insert_null_binds_a_parameter() {
    let mut assignments = Assignments::new();
    assignments.set("name", Value::Null);

    let (sql, params) = serialize(Insert { assignments });
    assert_eq!(sql, "INSERT INTO users (name) VALUES (?)");
    assert_eq!(params, vec![Value::Null]);
}

#[test]
fn insert_absent_is_refused() {
    let mut assignments = Assignments::new();
    assignments.set("name", Value::Absent);

    let mut params = Vec::new();
    let err = Serializer::new(&schema())
        .serialize(&Insert { assignments }.into(), &mut params)
        .unwrap_err();
    assert!(err.is_misuse());
}

#[test]
fn update_sets_and_restricts() {
    let mut assignments = Assignments::new();
    assignments.set("name", "Alice");
    assignments.set("email", Value::Null);

    let update = Update {
        assignments,
        predicates: vec![Predicate::is_in("id", vec![7.into()])],
    };

    let (sql, params) = serialize(update);
    assert_eq!(
        sql,
        "UPDATE users SET name = ?, email = ? WHERE id IN (?)"
    );
    assert_eq!(
        params,
        vec![Value::from("Alice"), Value::Null, Value::I64(7)]
    );
}

#[test]
fn delete_with_predicates() {
    let delete = Delete {
        predicates: vec![Predicate::eq("email", "bob@example.com")],
    };

    let (sql, params) = serialize(delete);
    assert_eq!(sql, "DELETE FROM users WHERE email = ?");
    assert_eq!(params, vec![Value::from("bob@example.com")]);
}

#[test]
fn delete_without_predicates_has_no_where() {
    let (sql, params) = serialize(Delete { predicates: vec![] });
    assert_eq!(sql, "DELETE FROM users");
    assert_eq!(params, vec![]);
}
