use thiserror::Error;

/// A generation or check-digit request that cannot be served as given.
///
/// Raised before any computation happens. Validation never produces this
/// error: malformed codes are reported through
/// [`ValidationResult`](super::ValidationResult) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParameterError {
    /// Office identifier is not in the recognised set.
    #[error("unknown office identifier '{0}': expected 10-59, X1-X9, Y1-Y9 or Z1-Z9")]
    UnknownOfficeId(String),

    /// Entity type is not in the recognised set.
    #[error("unknown entity type '{0}'")]
    UnknownEntityType(String),

    /// Caller-supplied EIC individual identifier is malformed.
    #[error("invalid individual identifier '{value}': {reason}")]
    InvalidIndividualId {
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Caller-supplied EAN data digits are malformed.
    #[error("invalid base data '{value}': {reason}")]
    InvalidBaseData {
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Input handed directly to a check-digit function is malformed.
    #[error("invalid check digit input '{value}': {reason}")]
    InvalidCheckInput {
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// EAN format label is not one of EAN-8, EAN-13, EAN-14.
    #[error("unknown EAN format '{0}': expected EAN-8, EAN-13 or EAN-14")]
    UnknownFormat(String),

    /// Bulk count is zero or above the configured maximum.
    #[error("requested count {requested} is outside 1..={max}")]
    CountOutOfRange {
        /// Number of codes asked for.
        requested: usize,
        /// Configured maximum batch size.
        max: usize,
    },
}

/// Errors returned by code generators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GenerateError {
    /// The request itself was rejected.
    #[error("invalid parameter: {0}")]
    Parameter(#[from] ParameterError),

    /// Bulk generation ran out of attempts before collecting enough unique codes.
    #[error("only {generated} of {requested} unique codes drawn within {attempts} attempts")]
    Exhausted {
        /// Number of codes asked for.
        requested: usize,
        /// Number of unique codes collected before giving up.
        generated: usize,
        /// Attempts spent.
        attempts: usize,
    },
}

impl GenerateError {
    /// True if the caller's request was at fault (as opposed to exhaustion).
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Self::Parameter(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_error_messages() {
        let e = ParameterError::UnknownOfficeId("99".into());
        assert!(e.to_string().contains("'99'"));

        let e = ParameterError::CountOutOfRange {
            requested: 500,
            max: 100,
        };
        assert_eq!(e.to_string(), "requested count 500 is outside 1..=100");
    }

    #[test]
    fn generate_error_wraps_parameter_error() {
        let e: GenerateError = ParameterError::UnknownEntityType("Q".into()).into();
        assert!(e.is_parameter_error());
        assert_eq!(e.to_string(), "invalid parameter: unknown entity type 'Q'");
    }

    #[test]
    fn exhausted_is_not_parameter_error() {
        let e = GenerateError::Exhausted {
            requested: 3,
            generated: 1,
            attempts: 48,
        };
        assert!(!e.is_parameter_error());
        assert!(e.to_string().contains("1 of 3"));
    }
}
