use thiserror::Error;

/// Error returned when a path cannot be normalized.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum PathError {
    /// The input path was the empty string.
    #[error("empty path")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_error_displays_reason() {
        assert_eq!(PathError::Empty.to_string(), "empty path");
    }
}
