use thiserror::Error;

/// Root domain error type.
///
/// Every variant is raised at construction or parse time only —
/// [`NumberValidator::is_valid_number`] communicates rejection through its
/// boolean result and never fails.
///
/// The display strings of the two construction variants are load-bearing:
/// callers assert on them verbatim.
///
/// [`NumberValidator::is_valid_number`]: crate::domain::NumberValidator::is_valid_number
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Precision was zero or negative.
    #[error("precision must be a positive number")]
    InvalidPrecision { precision: i32 },

    /// Scale was negative, or not strictly below precision.
    ///
    /// NB: the enforced check is strict (`scale < precision`) while the
    /// message says "less or equal". The message text is kept as-is.
    #[error("scale must be a non-negative number less or equal than precision")]
    InvalidScale { scale: i32, precision: i32 },

    /// A format spec string was not `N(m)` / `N(m,k)` notation.
    #[error("invalid number format spec '{spec}'")]
    InvalidFormatSpec { spec: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    // The exact wording of both construction messages is part of the
    // contract; these tests pin it.

    #[test]
    fn invalid_precision_message_is_exact() {
        let err = DomainError::InvalidPrecision { precision: -1 };
        assert_eq!(err.to_string(), "precision must be a positive number");
    }

    #[test]
    fn invalid_scale_message_is_exact() {
        let err = DomainError::InvalidScale {
            scale: 2,
            precision: 1,
        };
        assert_eq!(
            err.to_string(),
            "scale must be a non-negative number less or equal than precision"
        );
    }

    #[test]
    fn invalid_format_spec_names_the_input() {
        let err = DomainError::InvalidFormatSpec {
            spec: "banana".into(),
        };
        assert!(err.to_string().contains("'banana'"));
    }
}
