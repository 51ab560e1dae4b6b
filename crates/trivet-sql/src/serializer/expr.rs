use super::{Comma, Formatter, Params, ToSql};

use trivet_core::{
    stmt::{Direction, OrderBy, Predicate, Projection, Value},
    Error,
};

/// A field name, backtick-quoted when the schema flags it.
pub(super) struct FieldName<'a>(pub(super) &'a str);

/// The mapped table's name, quoted per the schema flag.
pub(super) struct TableName;

/// A bound parameter: pushes the value and writes its placeholder.
pub(super) struct Param<'a>(pub(super) &'a Value);

/// `field = ?` entry in a SET list.
pub(super) struct Assign<'a>(pub(super) &'a str, pub(super) &'a Value);

/// ` WHERE a AND b ...`, or nothing when there are no predicates.
pub(super) struct WhereClause<'a>(pub(super) &'a [Predicate]);

fn push_quoted(dst: &mut String, name: &str) {
    dst.push('`');
    for ch in name.chars() {
        // backticks are escaped by doubling
        if ch == '`' {
            dst.push('`');
        }
        dst.push(ch);
    }
    dst.push('`');
}

impl ToSql for FieldName<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        if f.serializer.field_quoted(self.0) {
            push_quoted(f.dst, self.0);
        } else {
            f.dst.push_str(self.0);
        }
    }
}

impl ToSql for TableName {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let schema = f.serializer.schema;
        if schema.quote_table() {
            push_quoted(f.dst, schema.table());
        } else {
            f.dst.push_str(schema.table());
        }
    }
}

impl ToSql for Param<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        if self.0.is_absent() {
            f.fail(Error::misuse(
                "absent value reached statement serialization",
            ));
            return;
        }

        let placeholder = f.params.push(self.0);
        placeholder.to_sql(f);
    }
}

impl ToSql for Assign<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, FieldName(self.0) " = " Param(self.1));
    }
}

impl ToSql for &Predicate {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Predicate::Raw { sql, params } => {
                f.dst.push_str(sql);
                for value in params {
                    if value.is_absent() {
                        f.fail(Error::misuse(
                            "absent value reached statement serialization",
                        ));
                        return;
                    }
                    let _ = f.params.push(value);
                }
            }
            Predicate::Eq { field, value } => {
                fmt!(f, FieldName(field) " = " Param(value));
            }
            Predicate::In { field, values } => {
                if values.is_empty() {
                    f.fail(Error::misuse("IN predicate with no values"));
                    return;
                }

                let values = Comma(values.iter().map(Param));
                fmt!(f, FieldName(field) " IN (" values ")");
            }
        }
    }
}

impl ToSql for WhereClause<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let mut sep = " WHERE ";
        for predicate in self.0 {
            fmt!(f, sep predicate);
            sep = " AND ";
        }
    }
}

impl ToSql for &Projection {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, FieldName(&self.field));
        if let Some(alias) = &self.alias {
            fmt!(f, " AS " alias.as_str());
        }
    }
}

impl ToSql for &OrderBy {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, FieldName(&self.field));
        if self.direction == Direction::Desc {
            fmt!(f, " DESC");
        }
    }
}
