#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// An ordering directive: a field name plus a direction, ascending by
/// default.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

impl OrderBy {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }
}

impl From<&str> for OrderBy {
    fn from(field: &str) -> Self {
        Self::asc(field)
    }
}

impl From<String> for OrderBy {
    fn from(field: String) -> Self {
        Self::asc(field)
    }
}
