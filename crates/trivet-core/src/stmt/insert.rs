use super::{Assignments, Statement};

/// An INSERT of a single record, built from the fields physically present
/// after the write-side transforms ran.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insert {
    pub assignments: Assignments,
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
