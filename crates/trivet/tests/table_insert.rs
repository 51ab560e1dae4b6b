mod support;

use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use support::MockConnection;

use trivet::{
    driver::Response,
    schema::{Field, FieldType, Rule, Schema},
    stmt::{Record, Value},
    Event, FindOptions, Table,
};

fn schema() -> Schema {
    Schema::builder("users")
        .field("id", Field::new())
        .field(
            "name",
            Field::new().rule(Rule::new().required().ty(FieldType::String)),
        )
        .field(
            "email",
            Field::new()
                .rule(Rule::new().ty(FieldType::String).email())
                .setter(|v| match v {
                    Value::String(s) => Value::String(s.to_lowercase()),
                    other => other,
                }),
        )
        .field("role", Field::new().default_value("member"))
        .field("secret", Field::new().private())
        .build()
}

#[tokio::test]
async fn insert_runs_the_full_pipeline() {
    let conn = MockConnection::new().respond(Response::count(1).with_last_insert_id(7));
    let table = Table::new(schema());

    let record = Record::new()
        .with("name", "Bob")
        .with("email", "Bob@Example.COM");
    let saved = table
        .insert(&conn, record, FindOptions::new())
        .await
        .unwrap();

    let (sql, params) = conn.only_call();
    assert_eq!(sql, "INSERT INTO users (name, email, role) VALUES (?, ?, ?)");
    assert_eq!(
        params,
        vec![
            Value::from("Bob"),
            Value::from("bob@example.com"),
            Value::from("member"),
        ]
    );

    // The generated identity value is folded back into the record.
    assert_eq!(saved.get("id"), Some(&Value::I64(7)));
    assert_eq!(saved.get("email"), Some(&Value::from("bob@example.com")));
}

#[tokio::test]
async fn validation_failure_aborts_before_storage() {
    let conn = MockConnection::new();
    let table = Table::new(schema());

    let err = table
        .insert(&conn, Record::new(), FindOptions::new())
        .await
        .unwrap_err();

    let violations = err.as_validation().unwrap().violations();
    assert_eq!(violations[0].field, "name");
    assert_eq!(violations[0].message, "is required");
    assert_eq!(conn.call_count(), 0);
}

#[tokio::test]
async fn unknown_field_aborts_before_storage() {
    let conn = MockConnection::new();
    let table = Table::new(schema());

    let record = Record::new().with("name", "Bob").with("nickname", "bobby");
    let err = table
        .insert(&conn, record, FindOptions::new())
        .await
        .unwrap_err();

    let violations = err.as_validation().unwrap().violations();
    assert_eq!(violations[0].field, "nickname");
    assert_eq!(violations[0].message, "invalid field");
    assert_eq!(conn.call_count(), 0);
}

#[tokio::test]
async fn absent_field_is_omitted_from_the_statement() {
    let conn = MockConnection::new().respond(Response::count(1));
    let table = Table::new(schema());

    let record = Record::new()
        .with("name", "Bob")
        .with("secret", Value::Absent);
    table
        .insert(&conn, record, FindOptions::new())
        .await
        .unwrap();

    let (sql, _) = conn.only_call();
    assert_eq!(sql, "INSERT INTO users (name, role) VALUES (?, ?)");
}

#[tokio::test]
async fn explicit_null_is_not_defaulted() {
    let conn = MockConnection::new().respond(Response::count(1));
    let table = Table::new(schema());

    let record = Record::new().with("name", "Bob").with("role", Value::Null);
    table
        .insert(&conn, record, FindOptions::new())
        .await
        .unwrap();

    let (_, params) = conn.only_call();
    assert_eq!(params, vec![Value::from("Bob"), Value::Null]);
}

#[tokio::test]
async fn private_fields_are_stripped_from_the_result() {
    let conn = MockConnection::new().respond(Response::count(1));
    let table = Table::new(schema());

    let record = Record::new().with("name", "Bob").with("secret", "hunter2");
    let saved = table
        .insert(&conn, record, FindOptions::new())
        .await
        .unwrap();

    assert!(!saved.contains("secret"));

    // The value still reached storage.
    let (sql, _) = conn.calls().into_iter().next().unwrap();
    assert!(sql.contains("secret"));
}

#[tokio::test]
async fn insert_emits_insert_then_save() {
    let conn = MockConnection::new().respond(Response::count(1).with_last_insert_id(7));
    let table = Table::new(schema());

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    table.subscribe(move |event| {
        sink.lock().unwrap().push(match event {
            Event::Insert { .. } => "insert",
            Event::Update { .. } => "update",
            Event::Remove { .. } => "remove",
            Event::Save { is_new: true, .. } => "save-new",
            Event::Save { is_new: false, .. } => "save",
        });
    });

    let record = Record::new().with("name", "Bob");
    table
        .insert(&conn, record, FindOptions::new())
        .await
        .unwrap();

    assert_eq!(*seen.lock().unwrap(), vec!["insert", "save-new"]);
}

#[tokio::test]
async fn no_events_fire_on_failure() {
    let conn = MockConnection::new();
    let table = Table::new(schema());

    let fired = Arc::new(Mutex::new(0));
    let sink = fired.clone();
    table.subscribe(move |_| *sink.lock().unwrap() += 1);

    let _ = table
        .insert(&conn, Record::new(), FindOptions::new())
        .await
        .unwrap_err();

    assert_eq!(*fired.lock().unwrap(), 0);
}
