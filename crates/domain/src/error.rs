//! Domain error types

use thiserror::Error;

/// Errors caused by how the caller configured delimiters.
///
/// These are programming errors at the call site and are raised before any
/// template text is scanned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// More than two delimiter markers were supplied.
    #[error("too many delimiters in `{parameter}`: expected 1 or 2, got {count}")]
    TooManyDelimiters {
        /// Name of the offending argument.
        parameter: &'static str,
        /// Number of markers supplied.
        count: usize,
    },

    /// No delimiter marker was supplied.
    #[error("no delimiter supplied in `{parameter}`")]
    MissingDelimiter {
        /// Name of the offending argument.
        parameter: &'static str,
    },

    /// A delimiter marker is the empty string.
    #[error("delimiter at index {index} is empty")]
    EmptyDelimiter {
        /// Index of the empty marker in the supplied list.
        index: usize,
    },
}

/// Errors caused by template text that is malformed for the chosen delimiters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The number of delimiter boundaries is odd.
    #[error("unterminated placeholder: {count} delimiter boundaries, expected an even number")]
    UnterminatedPlaceholder {
        /// Total number of boundaries found.
        count: usize,
    },

    /// Start and end markers are distinct and appear a different number of times.
    #[error("unbalanced delimiters: {starts} opening and {ends} closing markers")]
    UnbalancedDelimiters {
        /// Number of opening boundaries.
        starts: usize,
        /// Number of closing boundaries.
        ends: usize,
    },

    /// A closing marker comes before its opening marker, or placeholders overlap.
    #[error("placeholder opened at offset {open} is closed out of order at offset {close}")]
    MisorderedPair {
        /// Offset of the opening marker in the unescaped text.
        open: usize,
        /// Offset of the closing marker in the unescaped text.
        close: usize,
    },

    /// A delimiter offset does not fall on character boundaries inside the text.
    #[error("delimiter at offset {offset} lies outside the {len}-byte template")]
    OffsetOutOfRange {
        /// Offending byte offset.
        offset: usize,
        /// Length of the text in bytes.
        len: usize,
    },
}

/// Domain-level errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The delimiter configuration is invalid.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The template text is malformed.
    #[error("format error: {0}")]
    Format(#[from] FormatError),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_delimiters_names_parameter() {
        let err = ConfigurationError::TooManyDelimiters {
            parameter: "delimiter_chars",
            count: 3,
        };
        let message = err.to_string();
        assert!(message.contains("delimiter_chars"));
        assert!(message.contains('3'));
    }

    #[test]
    fn test_domain_error_wraps_format_error() {
        let err: DomainError = FormatError::UnterminatedPlaceholder { count: 5 }.into();
        assert!(matches!(err, DomainError::Format(_)));
        assert!(err.to_string().starts_with("format error"));
    }
}
