use regex::Regex;

use std::sync::OnceLock;

use trivet_core::{
    schema::{Format, Rule, Schema},
    stmt::{Record, Value},
    Error, ValidationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Insert,
    Update,
}

/// Validates a candidate record against the schema.
///
/// Unknown field names fail fast: if any key is not a recognized schema
/// field, the error is returned before any rule runs. Insert mode checks
/// every field's rule; update mode checks only the fields present in the
/// record. All rule violations are collected, not just the first.
pub(crate) fn validate(schema: &Schema, record: &Record, mode: Mode) -> Result<(), Error> {
    let mut err = ValidationError::new();

    for name in record.field_names() {
        if !schema.contains_field(name) {
            err.add(name, "invalid field");
        }
    }
    if err.has_violations() {
        return Err(err.into());
    }

    match mode {
        Mode::Insert => {
            for (name, field) in schema.fields() {
                if let Some(rule) = &field.rule {
                    check(name, rule, record.get(name), &mut err);
                }
            }
        }
        Mode::Update => {
            for (name, value) in record.iter() {
                if let Some(rule) = schema.field(name).and_then(|f| f.rule.as_ref()) {
                    check(name, rule, Some(value), &mut err);
                }
            }
        }
    }

    if err.has_violations() {
        Err(err.into())
    } else {
        Ok(())
    }
}

fn check(name: &str, rule: &Rule, value: Option<&Value>, err: &mut ValidationError) {
    let value = match value {
        None | Some(Value::Absent) => {
            if rule.required {
                err.add(name, "is required");
            }
            return;
        }
        Some(value) => value,
    };

    if !rule.types.is_empty() && !rule.types.iter().any(|ty| ty.matches(value)) {
        err.add(name, "is the wrong type");
        return;
    }

    if let (Some(Format::Email), Some(text)) = (rule.format, value.as_str()) {
        if !email_regex().is_match(text) {
            err.add(name, "is not a valid email");
        }
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use trivet_core::schema::{Field, FieldType};

    fn schema() -> Schema {
        Schema::builder("users")
            .field("id", Field::new())
            .field(
                "name",
                Field::new().rule(Rule::new().required().ty(FieldType::String)),
            )
            .field(
                "email",
                Field::new().rule(Rule::new().ty(FieldType::String).email()),
            )
            .field(
                "age",
                Field::new().rule(Rule::new().ty(FieldType::Integer).ty(FieldType::Null)),
            )
            .build()
    }

    #[test]
    fn unknown_field_fails_fast() {
        // The type problem on `name` must not be reported: unknown fields
        // short-circuit before rule checks.
        let record = Record::new().with("nickname", "x").with("name", 5);

        let err = validate(&schema(), &record, Mode::Insert).unwrap_err();
        let violations = err.as_validation().unwrap().violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "nickname");
        assert_eq!(violations[0].message, "invalid field");
    }

    #[test]
    fn insert_checks_every_rule() {
        let record = Record::new();

        let err = validate(&schema(), &record, Mode::Insert).unwrap_err();
        let violations = err.as_validation().unwrap().violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "name");
        assert_eq!(violations[0].message, "is required");
    }

    #[test]
    fn update_checks_only_present_fields() {
        // `name` is required but not being changed; partial validation must
        // leave it alone.
        let record = Record::new().with("age", 30);
        assert!(validate(&schema(), &record, Mode::Update).is_ok());
    }

    #[test]
    fn type_union_allows_null() {
        let record = Record::new().with("name", "Bob").with("age", Value::Null);
        assert!(validate(&schema(), &record, Mode::Insert).is_ok());
    }

    #[test]
    fn type_union_rejects_other_types() {
        let record = Record::new().with("age", "thirty");

        let err = validate(&schema(), &record, Mode::Update).unwrap_err();
        let violations = err.as_validation().unwrap().violations();
        assert_eq!(violations[0].field, "age");
        assert_eq!(violations[0].message, "is the wrong type");
    }

    #[test]
    fn email_format_is_checked() {
        let record = Record::new().with("email", "not-an-email");

        let err = validate(&schema(), &record, Mode::Update).unwrap_err();
        let violations = err.as_validation().unwrap().violations();
        assert_eq!(violations[0].field, "email");
        assert_eq!(violations[0].message, "is not a valid email");
    }

    #[test]
    fn absent_on_required_field_is_a_violation() {
        let record = Record::new().with("name", Value::Absent);

        let err = validate(&schema(), &record, Mode::Update).unwrap_err();
        let violations = err.as_validation().unwrap().violations();
        assert_eq!(violations[0].field, "name");
        assert_eq!(violations[0].message, "is required");
    }

    #[test]
    fn absent_on_optional_field_passes() {
        let record = Record::new().with("age", Value::Absent);
        assert!(validate(&schema(), &record, Mode::Update).is_ok());
    }

    #[test]
    fn all_violations_are_collected() {
        let record = Record::new().with("name", 5).with("email", "nope");

        let err = validate(&schema(), &record, Mode::Insert).unwrap_err();
        assert_eq!(err.as_validation().unwrap().violations().len(), 2);
    }
}
