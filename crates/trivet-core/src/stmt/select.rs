use super::{OrderBy, Predicate, Projection, Statement};

/// A SELECT over the mapped table.
///
/// An empty projection list selects all columns. `limit` and `offset` are
/// emitted only when explicitly set; `Some(0)` is a valid explicit limit
/// and is distinguished from `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    pub projections: Vec<Projection>,
    pub predicates: Vec<Predicate>,
    pub order: Vec<OrderBy>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Select {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_predicate(&mut self, predicate: impl Into<Predicate>) {
        self.predicates.push(predicate.into());
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
