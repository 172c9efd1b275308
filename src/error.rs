use thiserror::Error;

/// Result alias used across the generator utilities.
pub type Result<T, E = GeneratorError> = core::result::Result<T, E>;

/// Domain error for the generator utilities.
///
/// Every validation failure surfaces as this one kind, carrying a
/// human-readable message. The keyspace partitioner never produces it
/// (out-of-range counts are clamped, not rejected).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GeneratorError {
    message: String,
}

impl GeneratorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_its_message() {
        let err = GeneratorError::new("test");
        assert_eq!(err.to_string(), "test");
        assert_eq!(err.message(), "test");
    }
}
