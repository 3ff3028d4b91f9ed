//! Length, digit and check-digit validation of EAN codes.

use tracing::debug;

use crate::core::{ValidationIssue, ValidationResult, Validator};

use super::checksum::mod10;
use super::{EanComponents, EanFormat};

/// EAN validator.
///
/// The format is inferred from the input length; there is no way to ask for
/// one format in particular. The lenient validator strips hyphens and
/// whitespace first ("4006381-33393 1").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EanValidator {
    normalize: bool,
}

impl EanValidator {
    /// Evaluate input exactly as given.
    pub fn strict() -> Self {
        Self { normalize: false }
    }

    /// Strip separators before evaluating.
    pub fn lenient() -> Self {
        Self { normalize: true }
    }

    /// Whether input is normalised before validation.
    pub fn is_lenient(&self) -> bool {
        self.normalize
    }
}

/// Remove hyphens and whitespace.
pub fn normalize_ean(code: &str) -> String {
    code.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

impl Validator for EanValidator {
    type Components = EanComponents;

    fn validate(&self, code: &str) -> ValidationResult<EanComponents> {
        let code = if self.normalize {
            normalize_ean(code)
        } else {
            code.to_string()
        };
        let mut errors = Vec::new();

        let len = code.chars().count();
        let format = EanFormat::from_length(len);
        if format.is_none() {
            errors.push(ValidationIssue::structural(
                "code",
                format!("invalid EAN length: expected 8, 13, or 14 digits, got {len}"),
            ));
        }

        let all_digits = code.chars().all(|c| c.is_ascii_digit());
        if !all_digits {
            errors.push(ValidationIssue::structural(
                "code",
                "EAN must contain only digits 0-9",
            ));
        }

        // nothing to split without a known length
        let Some(format) = format else {
            debug!(%code, errors = errors.len(), "EAN rejected on length");
            return ValidationResult::new(code, errors, None);
        };

        let components = EanComponents::split(&code, format);
        if all_digits {
            if let Some(expected) = mod10(&components.data) {
                if components.check_digit != expected.to_string() {
                    errors.push(ValidationIssue::check_digit_mismatch(
                        expected,
                        &components.check_digit,
                    ));
                }
            }
        }

        if !errors.is_empty() {
            debug!(%code, %format, errors = errors.len(), "EAN rejected");
        }
        ValidationResult::new(code, errors, Some(components))
    }
}
