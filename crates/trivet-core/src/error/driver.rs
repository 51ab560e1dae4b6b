/// A storage-engine failure as reported by the execution capability.
///
/// `code` is the engine's numeric failure code. `column` and `index` are
/// structured metadata a driver fills in when the engine exposes the
/// referencing column or the violated key name directly; the error
/// translator prefers them over parsing `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverError {
    pub code: Option<u16>,
    pub message: String,
    pub column: Option<String>,
    pub index: Option<String>,
}

impl DriverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_code(mut self, code: u16) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.code {
            Some(code) => write!(f, "storage error (code {}): {}", code, self.message),
            None => write!(f, "storage error: {}", self.message),
        }
    }
}

impl std::error::Error for DriverError {}
