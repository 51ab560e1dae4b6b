use super::{Delete, Insert, Select, Update};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

impl Statement {
    pub fn as_select(&self) -> Option<&Select> {
        match self {
            Self::Select(stmt) => Some(stmt),
            _ => None,
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, Self::Select(_))
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Self::Insert(_))
    }
}
