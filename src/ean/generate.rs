//! EAN generation from supplied or random data digits.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::random::{DIGITS, random_string};
use crate::core::{BulkLimits, CodeBatch, GenerateError, Generator, ParameterError, draw_unique};

use super::checksum::compute_ean_check_digit;
use super::{EanComponents, EanFormat};

/// Parameters for generating one EAN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EanRequest {
    /// Data digits; left-padded with zeros to the format's data length.
    /// Random when absent.
    pub base_data: Option<String>,
    /// Target format.
    pub format: EanFormat,
}

impl EanRequest {
    /// Request a code with random data digits.
    pub fn new(format: EanFormat) -> Self {
        Self {
            base_data: None,
            format,
        }
    }

    /// Use the given data digits.
    pub fn base_data(mut self, data: impl Into<String>) -> Self {
        self.base_data = Some(data.into());
        self
    }
}

/// A generated EAN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedEan {
    /// The full code, check digit included.
    pub code: String,
    /// Its parts.
    pub components: EanComponents,
}

/// EAN generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EanGenerator {
    limits: BulkLimits,
}

impl EanGenerator {
    /// Generator with default bulk limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the largest batch [`generate_bulk`](Self::generate_bulk) accepts.
    pub fn with_max_bulk(mut self, max_bulk: usize) -> Self {
        self.limits.max_bulk = max_bulk;
        self
    }

    /// Set the random draws allowed per requested code in bulk mode.
    pub fn with_max_attempts(mut self, attempts_per_code: usize) -> Self {
        self.limits.attempts_per_code = attempts_per_code;
        self
    }

    /// Current bulk limits.
    pub fn limits(&self) -> BulkLimits {
        self.limits
    }

    /// Generate `count` distinct codes with random data digits.
    pub fn generate_bulk(&self, format: EanFormat, count: usize) -> Result<CodeBatch, GenerateError> {
        let batch = draw_unique(count, &self.limits, || {
            let data = random_string(DIGITS, format.data_len());
            assemble(format, data).map(|g| g.code)
        })?;
        debug!(%format, count = batch.count, "EAN batch generated");
        Ok(batch)
    }
}

impl Generator for EanGenerator {
    type Request = EanRequest;
    type Output = GeneratedEan;

    fn generate(&self, request: &EanRequest) -> Result<GeneratedEan, GenerateError> {
        let format = request.format;
        let data = match &request.base_data {
            Some(base) => pad_base_data(base, format)?,
            None => random_string(DIGITS, format.data_len()),
        };
        let generated = assemble(format, data)?;
        debug!(code = %generated.code, %format, "EAN generated");
        Ok(generated)
    }
}

/// Left-pad `base` with zeros to the data length of `format`.
fn pad_base_data(base: &str, format: EanFormat) -> Result<String, ParameterError> {
    let want = format.data_len();
    if base.is_empty() {
        return Err(ParameterError::InvalidBaseData {
            value: base.into(),
            reason: "no data digits".into(),
        });
    }
    if !base.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParameterError::InvalidBaseData {
            value: base.into(),
            reason: "only digits 0-9 are allowed".into(),
        });
    }
    if base.len() > want {
        return Err(ParameterError::InvalidBaseData {
            value: base.into(),
            reason: format!(
                "{format} takes at most {want} data digits, got {}",
                base.len()
            ),
        });
    }
    Ok(format!("{base:0>want$}"))
}

fn assemble(format: EanFormat, data: String) -> Result<GeneratedEan, GenerateError> {
    let check = compute_ean_check_digit(&data)?;
    let components = EanComponents {
        format,
        data,
        check_digit: check.to_string(),
    };
    Ok(GeneratedEan {
        code: components.full_code(),
        components,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DEFAULT_MAX_BULK, Validator};
    use crate::ean::EanValidator;

    fn generate(request: EanRequest) -> Result<GeneratedEan, GenerateError> {
        EanGenerator::new().generate(&request)
    }

    #[test]
    fn from_full_data() {
        let g = generate(EanRequest::new(EanFormat::Ean13).base_data("400638133393")).unwrap();
        assert_eq!(g.code, "4006381333931");
        assert_eq!(g.components.data, "400638133393");
        assert_eq!(g.components.check_digit, "1");
    }

    #[test]
    fn short_data_is_left_padded() {
        let g = generate(EanRequest::new(EanFormat::Ean13).base_data("1234567")).unwrap();
        assert_eq!(g.components.data, "000001234567");
        assert_eq!(g.code, "0000012345670");

        let g = generate(EanRequest::new(EanFormat::Ean14).base_data("1234567890")).unwrap();
        assert_eq!(g.components.data, "0001234567890");
        assert_eq!(g.code, "00012345678905");
    }

    #[test]
    fn random_data() {
        for format in EanFormat::ALL {
            let g = generate(EanRequest::new(format)).unwrap();
            assert_eq!(g.code.len(), format.len());
            assert!(g.code.chars().all(|c| c.is_ascii_digit()));
            assert!(EanValidator::strict().is_valid(&g.code));
            assert_eq!(g.components.format, format);
        }
    }

    #[test]
    fn oversized_data_rejected() {
        let err = generate(EanRequest::new(EanFormat::Ean8).base_data("12345678")).unwrap_err();
        assert!(err.is_parameter_error());
        assert!(err.to_string().contains("at most 7"), "{err}");
    }

    #[test]
    fn bad_data_rejected() {
        for data in ["", "12a4", "-123", "１２３"] {
            let err = generate(EanRequest::new(EanFormat::Ean13).base_data(data)).unwrap_err();
            assert!(
                matches!(
                    err,
                    GenerateError::Parameter(ParameterError::InvalidBaseData { .. })
                ),
                "{data:?}: {err}"
            );
        }
    }

    #[test]
    fn bulk_unique() {
        let batch = EanGenerator::new().generate_bulk(EanFormat::Ean13, 40).unwrap();
        assert_eq!(batch.count, 40);
        let mut codes = batch.codes.clone();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 40);
        assert!(batch.codes.iter().all(|c| EanValidator::strict().is_valid(c)));
    }

    #[test]
    fn bulk_bounds() {
        let g = EanGenerator::new();
        assert!(g.generate_bulk(EanFormat::Ean8, 0).is_err());
        assert!(g.generate_bulk(EanFormat::Ean8, DEFAULT_MAX_BULK).is_ok());
        assert!(g.generate_bulk(EanFormat::Ean8, DEFAULT_MAX_BULK + 1).is_err());
        let g = g.with_max_bulk(10).with_max_attempts(2);
        assert_eq!(g.limits().max_bulk, 10);
        assert!(g.generate_bulk(EanFormat::Ean8, 11).is_err());
    }
}
