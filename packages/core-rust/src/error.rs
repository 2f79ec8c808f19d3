//! Domain rule violations raised while constructing core values.

/// A domain rule was broken while constructing a value.
///
/// Raised when an otherwise well-typed input violates an invariant, such as
/// a duplicate registration or a record whose parts disagree in length.
#[derive(Debug, thiserror::Error)]
#[error("constraint violation: {message}")]
pub struct ConstraintViolation {
    message: String,
}

impl ConstraintViolation {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
