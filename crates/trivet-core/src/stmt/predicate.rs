use super::Value;

/// A boolean condition fragment restricting which rows a statement affects.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Caller-supplied fragment, appended verbatim, with its bound
    /// parameters in placeholder order.
    Raw { sql: String, params: Vec<Value> },

    /// `field = ?`
    Eq { field: String, value: Value },

    /// `field IN (?, ...)`; the value list must be non-empty.
    In { field: String, values: Vec<Value> },
}

impl Predicate {
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw {
            sql: sql.into(),
            params: vec![],
        }
    }

    pub fn raw_bind(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self::Raw {
            sql: sql.into(),
            params,
        }
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn is_in(field: impl Into<String>, values: Vec<Value>) -> Self {
        Self::In {
            field: field.into(),
            values,
        }
    }
}
