//! Structural and check-character validation of EIC codes.

use tracing::debug;

use crate::core::{ValidationIssue, ValidationResult, Validator};

use super::checksum::{char_value, mod37_36};
use super::{EIC_LENGTH, EicComponents};

/// EIC validator.
///
/// The strict validator (the default) evaluates the input exactly as given.
/// The lenient validator first applies [`normalize_eic`], accepting the
/// display forms people copy from documents ("27x-goeps-0000001i").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EicValidator {
    normalize: bool,
}

impl EicValidator {
    /// Evaluate input exactly as given.
    pub fn strict() -> Self {
        Self { normalize: false }
    }

    /// Strip separators and upper-case before evaluating.
    pub fn lenient() -> Self {
        Self { normalize: true }
    }

    /// Whether input is normalised before validation.
    pub fn is_lenient(&self) -> bool {
        self.normalize
    }
}

/// Remove hyphens and whitespace and upper-case ASCII letters.
pub fn normalize_eic(code: &str) -> String {
    code.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

impl Validator for EicValidator {
    type Components = EicComponents;

    /// Checks run in order: length, character set, office identifier,
    /// entity type, check character. A length failure skips the field
    /// checks; every other failure is reported.
    fn validate(&self, code: &str) -> ValidationResult<EicComponents> {
        let code = if self.normalize {
            normalize_eic(code)
        } else {
            code.to_string()
        };
        let mut errors = Vec::new();

        let components = EicComponents::from_code(&code);
        if components.is_none() {
            errors.push(ValidationIssue::structural(
                "code",
                format!(
                    "invalid EIC length: expected {EIC_LENGTH} characters, got {}",
                    code.chars().count()
                ),
            ));
        }

        let mut invalid: Vec<char> = Vec::new();
        for c in code.chars().filter(|c| char_value(*c).is_none()) {
            if !invalid.contains(&c) {
                invalid.push(c);
            }
        }
        if !invalid.is_empty() {
            let listed: Vec<String> = invalid.iter().map(|c| format!("'{c}'")).collect();
            errors.push(ValidationIssue::structural(
                "code",
                format!(
                    "EIC contains invalid characters {}: only 0-9 and A-Z are allowed",
                    listed.join(", ")
                ),
            ));
        }

        // field checks need the fixed offsets
        let Some(components) = components else {
            debug!(%code, errors = errors.len(), "EIC rejected on length");
            return ValidationResult::new(code, errors, None);
        };

        if components.office().is_none() {
            errors.push(ValidationIssue::unknown_value(
                "office_id",
                format!("unknown office identifier '{}'", components.office_id),
            ));
        }

        if components.entity().is_none() {
            errors.push(ValidationIssue::unknown_value(
                "entity_type",
                format!("unknown entity type '{}'", components.entity_type),
            ));
        }

        // only computable over a clean alphabet
        if invalid.is_empty() {
            if let Some(expected) = mod37_36(&components.base()) {
                if components.check_digit != expected.to_string() {
                    errors.push(ValidationIssue::check_digit_mismatch(
                        expected,
                        &components.check_digit,
                    ));
                }
            }
        }

        if !errors.is_empty() {
            debug!(%code, errors = errors.len(), "EIC rejected");
        }
        ValidationResult::new(code, errors, Some(components))
    }
}
