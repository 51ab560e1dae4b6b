/// Deletion was refused because an existing row in another table still
/// references the target row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstraintError {
    _priv: (),
}

impl ConstraintError {
    pub fn new() -> Self {
        Self::default()
    }
}

impl core::fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("deletion refused: row is referenced by another table")
    }
}

impl std::error::Error for ConstraintError {}
