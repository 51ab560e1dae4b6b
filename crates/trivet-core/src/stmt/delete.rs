use super::{Predicate, Statement};

/// A DELETE restricted by the resolved identifier predicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Delete {
    pub predicates: Vec<Predicate>,
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
