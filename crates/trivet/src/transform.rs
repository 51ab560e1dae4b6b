use trivet_core::{
    schema::Schema,
    stmt::{Record, Value},
};

/// Insert-time defaults. A default applies iff the field is missing from
/// the record or explicitly [`Value::Absent`]; `Null`, `false`, `0`, and
/// `""` are real values and never trigger one. A field that stays empty
/// with no default is dropped so storage fills its own default. The
/// identity field is never defaulted by this layer.
pub(crate) fn apply_defaults(schema: &Schema, record: &mut Record) {
    for (name, field) in schema.fields() {
        if !matches!(record.get(name), None | Some(Value::Absent)) {
            continue;
        }

        match &field.default {
            Some(default) if name != schema.id_field() => {
                record.set(name, default.produce());
            }
            _ => {
                record.remove(name);
            }
        }
    }
}

/// Write-side setters, applied to every present field that declares one.
/// Runs after validation so validation sees the raw input.
pub(crate) fn apply_setters(schema: &Schema, record: &mut Record) {
    for (name, value) in record.iter_mut() {
        if value.is_absent() {
            continue;
        }
        if let Some(setter) = schema.field(name).and_then(|f| f.setter.as_ref()) {
            *value = setter(value.take());
        }
    }
}

/// Update-time handling of the absent sentinel: an explicitly absent field
/// clears to storage null.
pub(crate) fn resolve_absent(record: &mut Record) {
    for (_, value) in record.iter_mut() {
        if value.is_absent() {
            *value = Value::Null;
        }
    }
}

/// Read-side transforms. Private fields are stripped unless overridden;
/// otherwise a declared getter replaces the value. Private-stripping takes
/// precedence: a private field with a getter is stripped, never
/// transformed.
pub(crate) fn apply_getters(
    schema: &Schema,
    record: &mut Record,
    ignore_private: bool,
    ignore_getters: bool,
) {
    let names: Vec<String> = record.field_names().map(str::to_owned).collect();

    for name in names {
        let Some(field) = schema.field(&name) else {
            continue;
        };

        if field.private && !ignore_private {
            record.remove(&name);
        } else if !ignore_getters {
            if let Some(getter) = &field.getter {
                if let Some(value) = record.get_mut(&name) {
                    *value = getter(value.take());
                }
            }
        }
    }
}
