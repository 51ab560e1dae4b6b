mod builder;
pub use builder::SchemaBuilder;

mod field;
pub use field::{DefaultValue, Field, FieldType, Format, Producer, Rule, Transform};

use indexmap::IndexMap;

use std::sync::Arc;

/// The per-table descriptor set: an immutable mapping from field name to
/// [`Field`], fixed at mapper-construction time. Unknown field names are
/// rejected against this set.
///
/// Cloning is cheap; clones share the same descriptor set.
#[derive(Debug, Clone)]
pub struct Schema {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    table: String,
    id_field: String,
    quote_table: bool,
    fields: IndexMap<String, Field>,
}

impl Schema {
    pub fn builder(table: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder::new(table)
    }

    pub(crate) fn from_parts(
        table: String,
        id_field: String,
        quote_table: bool,
        fields: IndexMap<String, Field>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                table,
                id_field,
                quote_table,
                fields,
            }),
        }
    }

    pub fn table(&self) -> &str {
        &self.inner.table
    }

    /// The field used as the implicit primary lookup key.
    pub fn id_field(&self) -> &str {
        &self.inner.id_field
    }

    pub fn quote_table(&self) -> bool {
        self.inner.quote_table
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.inner.fields.get(name)
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.inner.fields.contains_key(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.inner.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.inner.fields.keys().map(String::as_str)
    }
}
