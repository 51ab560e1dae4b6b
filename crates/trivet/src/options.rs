use crate::events::Meta;

use trivet_core::stmt::{OrderBy, Predicate, Projection, Value};

/// Structured options for the read path, plus the per-call knobs shared by
/// every operation (`meta`, the read-transform overrides).
///
/// Raw filter fragments carry their own bound parameters
/// ([`FindOptions::filter_bind`]), so placeholder-to-parameter pairing
/// cannot drift when identifier predicates are folded in.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    pub(crate) filter: Vec<Predicate>,
    pub(crate) fields: Vec<Projection>,
    pub(crate) order: Vec<OrderBy>,
    pub(crate) limit: Option<u64>,
    pub(crate) offset: Option<u64>,
    pub(crate) meta: Meta,
    pub(crate) ignore_getters: bool,
    pub(crate) ignore_private: bool,
}

impl FindOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a raw predicate fragment, e.g. `"age > 21"`.
    pub fn filter(mut self, sql: impl Into<String>) -> Self {
        self.filter.push(Predicate::raw(sql));
        self
    }

    /// Appends a raw predicate fragment with its bound parameters, e.g.
    /// `filter_bind("age > ?", [21.into()])`.
    pub fn filter_bind(
        mut self,
        sql: impl Into<String>,
        params: impl IntoIterator<Item = Value>,
    ) -> Self {
        self.filter
            .push(Predicate::raw_bind(sql, params.into_iter().collect()));
        self
    }

    /// Appends a projected field; bare name or `(field, alias)` pair.
    pub fn field(mut self, projection: impl Into<Projection>) -> Self {
        self.fields.push(projection.into());
        self
    }

    /// Appends an ordering directive; a bare field name orders ascending.
    pub fn order_by(mut self, order: impl Into<OrderBy>) -> Self {
        self.order.push(order.into());
        self
    }

    /// Explicit row limit. Zero is a valid limit, distinct from unset.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Opaque payload passed through to hooks and notifications.
    pub fn meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }

    /// Bypass read-side getters.
    pub fn ignore_getters(mut self) -> Self {
        self.ignore_getters = true;
        self
    }

    /// Include `private` fields in read results.
    pub fn ignore_private(mut self) -> Self {
        self.ignore_private = true;
        self
    }
}
