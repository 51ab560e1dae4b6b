use super::{Field, Schema};

use indexmap::IndexMap;

/// Builds a [`Schema`]. The identity field defaults to `"id"`.
#[derive(Debug)]
pub struct SchemaBuilder {
    table: String,
    id_field: String,
    quote_table: bool,
    fields: IndexMap<String, Field>,
}

impl SchemaBuilder {
    pub(crate) fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            id_field: "id".to_string(),
            quote_table: false,
            fields: IndexMap::new(),
        }
    }

    pub fn id_field(mut self, id_field: impl Into<String>) -> Self {
        self.id_field = id_field.into();
        self
    }

    pub fn quote_table(mut self) -> Self {
        self.quote_table = true;
        self
    }

    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    pub fn build(self) -> Schema {
        Schema::from_parts(self.table, self.id_field, self.quote_table, self.fields)
    }
}
