use super::{Assignments, Predicate, Statement};

/// An UPDATE setting only the present fields, restricted by the resolved
/// identifier predicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update {
    pub assignments: Assignments,
    pub predicates: Vec<Predicate>,
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
