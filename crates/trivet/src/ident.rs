use indexmap::IndexMap;

use trivet_core::stmt::{Predicate, Value};

/// A caller-supplied identifier selecting the target row(s) of an update,
/// delete, or find-by-id.
#[derive(Debug, Clone, PartialEq)]
pub enum Identifier {
    /// A single value matched against the identity field
    One(Value),

    /// A set of values matched against the identity field. The empty set is
    /// valid and means "no rows": downstream operations short-circuit
    /// without a storage call and without error.
    Many(Vec<Value>),

    /// A conjunction of equality matches over arbitrary fields
    Fields(IndexMap<String, Value>),
}

/// The normalized form of an identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// The identifier can match nothing; skip the storage call entirely.
    NoRows,

    Rows {
        predicates: Vec<Predicate>,

        /// True when the caller named exactly one row by scalar identity
        /// value; call sites wanting "first row or none" key off this.
        single: bool,
    },
}

impl Identifier {
    pub fn fields(entries: impl IntoIterator<Item = (impl Into<String>, impl Into<Value>)>) -> Self {
        Self::Fields(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn resolve(&self, id_field: &str) -> Resolved {
        match self {
            Self::Many(values) if values.is_empty() => Resolved::NoRows,
            Self::One(value) => Resolved::Rows {
                predicates: vec![Predicate::is_in(id_field, vec![value.clone()])],
                single: true,
            },
            Self::Many(values) => Resolved::Rows {
                predicates: vec![Predicate::is_in(id_field, values.clone())],
                single: false,
            },
            Self::Fields(map) => Resolved::Rows {
                predicates: map
                    .iter()
                    .map(|(field, value)| Predicate::eq(field, value.clone()))
                    .collect(),
                single: false,
            },
        }
    }
}

impl From<Value> for Identifier {
    fn from(value: Value) -> Self {
        Self::One(value)
    }
}

impl From<i32> for Identifier {
    fn from(value: i32) -> Self {
        Self::One(value.into())
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Self::One(value.into())
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::One(value.into())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self::One(value.into())
    }
}

impl From<Vec<Value>> for Identifier {
    fn from(values: Vec<Value>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<i64>> for Identifier {
    fn from(values: Vec<i64>) -> Self {
        Self::Many(values.into_iter().map(Value::from).collect())
    }
}

impl From<IndexMap<String, Value>> for Identifier {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self::Fields(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_resolves_to_no_rows() {
        let id = Identifier::Many(vec![]);
        assert_eq!(id.resolve("id"), Resolved::NoRows);
    }

    #[test]
    fn scalar_resolves_to_single_in_predicate() {
        let id = Identifier::from(7);
        let Resolved::Rows { predicates, single } = id.resolve("id") else {
            panic!("expected rows");
        };
        assert!(single);
        assert_eq!(
            predicates,
            vec![Predicate::is_in("id", vec![Value::I64(7)])]
        );
    }

    #[test]
    fn sequence_resolves_to_in_predicate() {
        let id = Identifier::from(vec![1i64, 2, 3]);
        let Resolved::Rows { predicates, single } = id.resolve("id") else {
            panic!("expected rows");
        };
        assert!(!single);
        assert_eq!(
            predicates,
            vec![Predicate::is_in(
                "id",
                vec![Value::I64(1), Value::I64(2), Value::I64(3)]
            )]
        );
    }

    #[test]
    fn field_map_resolves_to_equality_conjunction() {
        let id = Identifier::fields([("email", "a@b.c"), ("tenant", "x")]);
        let Resolved::Rows { predicates, single } = id.resolve("id") else {
            panic!("expected rows");
        };
        assert!(!single);
        assert_eq!(
            predicates,
            vec![
                Predicate::eq("email", "a@b.c"),
                Predicate::eq("tenant", "x"),
            ]
        );
    }

    #[test]
    fn empty_field_map_resolves_to_zero_predicates() {
        let id = Identifier::Fields(IndexMap::new());
        let Resolved::Rows { predicates, .. } = id.resolve("id") else {
            panic!("expected rows");
        };
        assert!(predicates.is_empty());
    }
}
