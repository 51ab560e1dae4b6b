mod constraint;
mod driver;
mod misuse;
mod validation;

pub use constraint::ConstraintError;
pub use driver::DriverError;
pub use misuse::MisuseError;
pub use validation::{ValidationError, Violation};

/// An error produced by the mapper or translated from a storage failure.
///
/// Callers branch on kind, not on origin: validation failures, pre-hook
/// failures, and translated storage failures all arrive through the same
/// channel.
pub struct Error {
    kind: Box<ErrorKind>,
}

#[derive(Debug)]
enum ErrorKind {
    /// Misuse of the mapper API (e.g. an unrestricted delete)
    Misuse(MisuseError),

    /// One or more field-level violations
    Validation(ValidationError),

    /// Deletion refused because another table references the row
    Constraint(ConstraintError),

    /// A storage-engine failure, passed through untranslated
    Driver(DriverError),

    /// Anything else, bridged from `anyhow`
    Other(anyhow::Error),
}

impl Error {
    pub fn misuse(message: impl Into<String>) -> Self {
        MisuseError::new(message).into()
    }

    pub fn is_misuse(&self) -> bool {
        matches!(*self.kind, ErrorKind::Misuse(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(*self.kind, ErrorKind::Validation(_))
    }

    pub fn is_constraint(&self) -> bool {
        matches!(*self.kind, ErrorKind::Constraint(_))
    }

    pub fn is_driver(&self) -> bool {
        matches!(*self.kind, ErrorKind::Driver(_))
    }

    pub fn as_validation(&self) -> Option<&ValidationError> {
        match &*self.kind {
            ErrorKind::Validation(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_driver(&self) -> Option<&DriverError> {
        match &*self.kind {
            ErrorKind::Driver(err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &*self.kind {
            ErrorKind::Misuse(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::Validation(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::Constraint(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::Driver(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::Other(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.kind, f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &*self.kind {
            ErrorKind::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind: Box::new(kind),
        }
    }
}

impl From<MisuseError> for Error {
    fn from(err: MisuseError) -> Self {
        ErrorKind::Misuse(err).into()
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        ErrorKind::Validation(err).into()
    }
}

impl From<ConstraintError> for Error {
    fn from(err: ConstraintError) -> Self {
        ErrorKind::Constraint(err).into()
    }
}

impl From<DriverError> for Error {
    fn from(err: DriverError) -> Self {
        ErrorKind::Driver(err).into()
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        ErrorKind::Other(err).into()
    }
}
