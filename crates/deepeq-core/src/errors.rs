use thiserror::Error;

/// Result type alias using DeepEqError
pub type Result<T> = std::result::Result<T, DeepEqError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code for programmatic handling, tests
/// and CLI output. Comparing unequal values is never an error; these kinds
/// cover the surfaces around the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Input bytes are not valid UTF-8 or not valid JSON
    InvalidInput,
    /// JSON is well formed but a tagged fixture value is malformed
    InvalidFixture,
    /// An `equals`/`not_equals` assertion disagreed with the comparison
    AssertionFailed,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidFixture => "ERR_INVALID_FIXTURE",
            ExErrorKind::AssertionFailed => "ERR_ASSERTION_FAILED",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus context for
/// debugging: the operation, the location inside a fixture document, and a
/// free-form message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add document path context (e.g. `$.items[2]`)
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the document path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (at {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for deepeq operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeepEqError {
    /// Fixture bytes could not be decoded as JSON
    #[error("Invalid JSON input: {reason}")]
    InvalidJson { reason: String },

    /// A tagged fixture value is malformed
    #[error("Invalid fixture at {path}: {reason}")]
    InvalidFixture { path: String, reason: String },

    /// Assertion disagreed with the comparison outcome
    #[error("Assertion failed: {message}")]
    AssertionFailed { message: String },

    /// Filesystem access failed
    #[error("I/O error: {reason}")]
    Io { reason: String },

    /// A value could not be encoded
    #[error("Serialization failed: {reason}")]
    Serialization { reason: String },
}

impl From<DeepEqError> for ExError {
    fn from(err: DeepEqError) -> Self {
        let message = err.to_string();
        match err {
            DeepEqError::InvalidJson { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }
            DeepEqError::InvalidFixture { path, .. } => ExError::new(ExErrorKind::InvalidFixture)
                .with_path(path)
                .with_message(message),
            DeepEqError::AssertionFailed { .. } => {
                ExError::new(ExErrorKind::AssertionFailed).with_message(message)
            }
            DeepEqError::Io { .. } => ExError::new(ExErrorKind::Io).with_message(message),
            DeepEqError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for DeepEqError {
    fn from(err: serde_json::Error) -> Self {
        DeepEqError::InvalidJson {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for DeepEqError {
    fn from(err: std::io::Error) -> Self {
        DeepEqError::Io {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(ExErrorKind::InvalidInput.code(), "ERR_INVALID_INPUT");
        assert_eq!(ExErrorKind::InvalidFixture.code(), "ERR_INVALID_FIXTURE");
        assert_eq!(ExErrorKind::AssertionFailed.code(), "ERR_ASSERTION_FAILED");
    }

    #[test]
    fn test_ex_error_builder_and_display() {
        let err = ExError::new(ExErrorKind::InvalidFixture)
            .with_op("from_json")
            .with_path("$.items[1]")
            .with_message("`$set` must be an array");
        assert_eq!(err.kind(), ExErrorKind::InvalidFixture);
        assert_eq!(err.op(), Some("from_json"));
        assert_eq!(err.path(), Some("$.items[1]"));
        assert_eq!(
            err.to_string(),
            "[ERR_INVALID_FIXTURE] in operation 'from_json': `$set` must be an array (at $.items[1])"
        );
    }

    #[test]
    fn test_conversion_keeps_fixture_path() {
        let err: ExError = DeepEqError::InvalidFixture {
            path: "$.a".to_string(),
            reason: "bad tag".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ExErrorKind::InvalidFixture);
        assert_eq!(err.path(), Some("$.a"));
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;
        let inner = ExError::new(ExErrorKind::Io).with_message("disk");
        let outer = ExError::new(ExErrorKind::InvalidInput).with_source(inner);
        assert_eq!(outer.source_error().map(|e| e.kind()), Some(ExErrorKind::Io));
        assert!(outer.source().is_some());
    }
}
