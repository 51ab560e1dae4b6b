#[macro_use]
mod fmt;
use fmt::{Comma, ToSql};

mod expr;
use expr::{Assign, FieldName, Param, TableName, WhereClause};

mod params;
pub use params::{Params, Placeholder};

mod statement;

use trivet_core::{schema::Schema, stmt::Statement, Error};

/// Serialize a statement to parameterized SQL text (MySQL flavor: backtick
/// identifier quoting, `?` placeholders).
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Schema against which the statement is serialized; per-field `quote`
    /// flags and the table name come from here.
    schema: &'a Schema,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// First error hit while serializing, if any
    error: Option<Error>,
}

impl<'a> Serializer<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    pub fn serialize(
        &self,
        stmt: &Statement,
        params: &mut impl Params,
    ) -> trivet_core::Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            error: None,
        };

        stmt.to_sql(&mut fmt);

        match fmt.error.take() {
            Some(err) => Err(err),
            None => Ok(ret),
        }
    }

    fn field_quoted(&self, name: &str) -> bool {
        self.schema.field(name).map(|f| f.quote).unwrap_or(false)
    }
}

impl<T> Formatter<'_, T> {
    fn fail(&mut self, err: Error) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}
