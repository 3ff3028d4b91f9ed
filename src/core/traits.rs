use super::error::GenerateError;
use super::result::ValidationResult;

/// Parse-and-check capability shared by the EIC and EAN engines.
///
/// Implementations never fail or panic on arbitrary input: malformed codes
/// come back as an invalid [`ValidationResult`].
pub trait Validator {
    /// Parsed fields reported alongside the verdict.
    type Components;

    /// Validate a candidate code.
    fn validate(&self, code: &str) -> ValidationResult<Self::Components>;

    /// Shorthand for `validate(code).is_valid`.
    fn is_valid(&self, code: &str) -> bool {
        self.validate(code).is_valid
    }
}

/// Assemble-a-valid-code capability shared by the EIC and EAN engines.
pub trait Generator {
    /// Generation parameters.
    type Request;
    /// Generated code plus its parsed fields.
    type Output;

    /// Produce one code. Bad parameters are rejected before any computation.
    fn generate(&self, request: &Self::Request) -> Result<Self::Output, GenerateError>;
}
