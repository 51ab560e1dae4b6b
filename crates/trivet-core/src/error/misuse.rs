/// Misuse of the mapper API, e.g. a delete that resolved to no restricting
/// predicate. These fail loudly rather than silently proceeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MisuseError {
    message: String,
}

impl MisuseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl core::fmt::Display for MisuseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for MisuseError {}
