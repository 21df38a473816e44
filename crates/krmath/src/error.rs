use thiserror::Error;

/// Errors reported by the checked (`try_*`) vector operations.
///
/// The unchecked operations never return this type: they panic (indexing) or produce non-finite
/// results (normalizing a zero vector) instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A component index was not smaller than the number of components.
    #[error("index {index} is out of range for {len} components")]
    IndexOutOfRange { index: usize, len: usize },

    /// A slice did not have the number of elements required by the target vector.
    #[error("expected {expected} components, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The operation divides by the magnitude of a vector, and that magnitude is zero.
    #[error("vector has zero magnitude")]
    DegenerateVector,
}

/// Shorthand for a [`std::result::Result`] using this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Error::IndexOutOfRange { index: 3, len: 2 }.to_string(),
            "index 3 is out of range for 2 components"
        );
        assert_eq!(
            Error::DimensionMismatch {
                expected: 3,
                found: 5
            }
            .to_string(),
            "expected 3 components, found 5"
        );
        assert_eq!(
            Error::DegenerateVector.to_string(),
            "vector has zero magnitude"
        );
    }
}
