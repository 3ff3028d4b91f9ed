//! EAN / GTIN article numbers (GS1).
//!
//! EAN-8, EAN-13 and EAN-14 are digit strings whose last digit is a GS1
//! Mod 10 check digit over the rest. The format of a code is inferred from
//! its length.
//!
//! # Example
//!
//! ```rust
//! use energycode::ean::*;
//!
//! let result = validate_ean("4006381333931");
//! assert!(result.is_valid);
//! assert_eq!(result.components.unwrap().format, EanFormat::Ean13);
//!
//! let generated = generate_ean(Some("1234567"), EanFormat::Ean8).unwrap();
//! assert_eq!(generated.code, "12345670");
//!
//! assert_eq!(compute_ean_check_digit("400638133393").unwrap(), '1');
//! ```

mod checksum;
mod format;
mod generate;
mod validate;

use serde::{Deserialize, Serialize};

use crate::core::{CodeBatch, GenerateError, Generator, ValidationResult, Validator};

pub use checksum::compute_ean_check_digit;
pub use format::EanFormat;
pub use generate::{EanGenerator, EanRequest, GeneratedEan};
pub use validate::{EanValidator, normalize_ean};

/// Data digits and check digit of an EAN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EanComponents {
    /// Format inferred from the code length.
    pub format: EanFormat,
    /// Everything before the check digit.
    pub data: String,
    /// The last character.
    pub check_digit: String,
}

impl EanComponents {
    /// Split a code whose character count is `format.len()`.
    fn split(code: &str, format: EanFormat) -> Self {
        let data: String = code.chars().take(format.data_len()).collect();
        let check_digit: String = code.chars().skip(format.data_len()).collect();
        Self {
            format,
            data,
            check_digit,
        }
    }

    /// The complete code.
    pub fn full_code(&self) -> String {
        format!("{}{}", self.data, self.check_digit)
    }
}

/// Validate an EAN with the default (strict) validator.
pub fn validate_ean(code: &str) -> ValidationResult<EanComponents> {
    EanValidator::strict().validate(code)
}

/// Generate one EAN.
///
/// `base_data` shorter than the format's data length is left-padded with
/// zeros; without it, random digits are drawn.
pub fn generate_ean(
    base_data: Option<&str>,
    format: EanFormat,
) -> Result<GeneratedEan, GenerateError> {
    let mut request = EanRequest::new(format);
    if let Some(data) = base_data {
        request = request.base_data(data);
    }
    EanGenerator::new().generate(&request)
}

/// Generate `count` distinct random EANs of one format.
pub fn generate_ean_bulk(format: EanFormat, count: usize) -> Result<CodeBatch, GenerateError> {
    EanGenerator::new().generate_bulk(format, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_counts_characters() {
        let c = EanComponents::split("400638133393ö", EanFormat::Ean13);
        assert_eq!(c.data, "400638133393");
        assert_eq!(c.check_digit, "ö");
    }

    #[test]
    fn generate_then_validate() {
        for format in EanFormat::ALL {
            let g = generate_ean(None, format).unwrap();
            let r = validate_ean(&g.code);
            assert!(r.is_valid, "{}: {:?}", g.code, r.errors);
            assert_eq!(r.components, Some(g.components));
        }
    }

    #[test]
    fn free_functions() {
        assert_eq!(
            generate_ean(Some("400638133393"), EanFormat::Ean13)
                .unwrap()
                .code,
            "4006381333931"
        );
        assert_eq!(generate_ean_bulk(EanFormat::Ean14, 5).unwrap().count, 5);
        assert!(generate_ean_bulk(EanFormat::Ean14, 0).is_err());
    }
}
