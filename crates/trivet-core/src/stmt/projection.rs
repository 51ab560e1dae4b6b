/// A projected field: a bare field name, or a field + alias pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub field: String,
    pub alias: Option<String>,
}

impl Projection {
    pub fn named(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            alias: None,
        }
    }

    pub fn aliased(field: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            alias: Some(alias.into()),
        }
    }
}

impl From<&str> for Projection {
    fn from(field: &str) -> Self {
        Self::named(field)
    }
}

impl From<String> for Projection {
    fn from(field: String) -> Self {
        Self::named(field)
    }
}

impl From<(&str, &str)> for Projection {
    fn from((field, alias): (&str, &str)) -> Self {
        Self::aliased(field, alias)
    }
}
