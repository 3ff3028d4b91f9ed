//! EIC generation with random or caller-supplied individual identifiers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::random::{ALPHANUMERIC, random_string};
use crate::core::{BulkLimits, CodeBatch, GenerateError, Generator, ParameterError, draw_unique};

use super::checksum::{char_value, compute_eic_check_digit};
use super::{EicComponents, EntityType, INDIVIDUAL_ID_LENGTH, OfficeId};

/// Parameters for generating one EIC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EicRequest {
    /// Two-character office identifier (case-insensitive).
    pub office_id: String,
    /// One-character entity type (case-insensitive).
    pub entity_type: String,
    /// Explicit 12-character individual identifier; random when absent.
    pub individual_id: Option<String>,
}

impl EicRequest {
    /// Request a code with a random individual identifier.
    pub fn new(office_id: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            office_id: office_id.into(),
            entity_type: entity_type.into(),
            individual_id: None,
        }
    }

    /// Use the given individual identifier instead of a random one.
    pub fn individual_id(mut self, individual_id: impl Into<String>) -> Self {
        self.individual_id = Some(individual_id.into());
        self
    }
}

/// A generated EIC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedEic {
    /// The full 16-character code.
    pub code: String,
    /// Its fields.
    pub components: EicComponents,
}

/// EIC generator.
///
/// Random identifiers come from the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EicGenerator {
    limits: BulkLimits,
}

impl EicGenerator {
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

    /// Generate `count` distinct codes with random individual identifiers.
    ///
    /// Parameters are checked once, before the first draw.
    pub fn generate_bulk(
        &self,
        office_id: &str,
        entity_type: &str,
        count: usize,
    ) -> Result<CodeBatch, GenerateError> {
        let office: OfficeId = office_id.parse()?;
        let entity: EntityType = entity_type.parse()?;
        let batch = draw_unique(count, &self.limits, || {
            let individual = random_string(ALPHANUMERIC, INDIVIDUAL_ID_LENGTH);
            assemble(office, entity, individual).map(|g| g.code)
        })?;
        debug!(%office, %entity, count = batch.count, "EIC batch generated");
        Ok(batch)
    }
}

impl Generator for EicGenerator {
    type Request = EicRequest;
    type Output = GeneratedEic;

    fn generate(&self, request: &EicRequest) -> Result<GeneratedEic, GenerateError> {
        let office: OfficeId = request.office_id.parse()?;
        let entity: EntityType = request.entity_type.parse()?;
        let individual = match &request.individual_id {
            Some(id) => check_individual_id(id)?,
            None => random_string(ALPHANUMERIC, INDIVIDUAL_ID_LENGTH),
        };
        let generated = assemble(office, entity, individual)?;
        debug!(code = %generated.code, "EIC generated");
        Ok(generated)
    }
}

/// Upper-case a caller-supplied individual identifier and check length and alphabet.
fn check_individual_id(id: &str) -> Result<String, ParameterError> {
    let upper = id.to_ascii_uppercase();
    let len = upper.chars().count();
    if len != INDIVIDUAL_ID_LENGTH {
        return Err(ParameterError::InvalidIndividualId {
            value: id.into(),
            reason: format!("must be exactly {INDIVIDUAL_ID_LENGTH} characters, got {len}"),
        });
    }
    if upper.chars().any(|c| char_value(c).is_none()) {
        return Err(ParameterError::InvalidIndividualId {
            value: id.into(),
            reason: "only 0-9 and A-Z are allowed".into(),
        });
    }
    Ok(upper)
}

fn assemble(
    office: OfficeId,
    entity: EntityType,
    individual: String,
) -> Result<GeneratedEic, GenerateError> {
    let base = format!("{office}{entity}{individual}");
    let check = compute_eic_check_digit(&base)?;
    let components = EicComponents {
        office_id: office.to_string(),
        entity_type: entity.to_string(),
        individual_id: individual,
        check_digit: check.to_string(),
    };
    Ok(GeneratedEic {
        code: components.full_code(),
        components,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DEFAULT_MAX_BULK, Validator};
    use crate::eic::EicValidator;

    fn generator() -> EicGenerator {
        EicGenerator::new()
    }

    #[test]
    fn random_identifier() {
        let g = generator().generate(&EicRequest::new("27", "X")).unwrap();
        assert_eq!(g.code.len(), 16);
        assert!(g.code.starts_with("27X"));
        assert_eq!(g.components.individual_id.len(), 12);
        assert!(EicValidator::strict().is_valid(&g.code));
    }

    #[test]
    fn explicit_identifier() {
        let g = generator()
            .generate(&EicRequest::new("27", "X").individual_id("GOEPS0000001"))
            .unwrap();
        assert_eq!(g.code, "27XGOEPS0000001I");
        assert_eq!(g.components.check_digit, "I");
    }

    #[test]
    fn parameters_are_case_folded() {
        let g = generator()
            .generate(&EicRequest::new("x1", "t").individual_id("abcdef123456"))
            .unwrap();
        assert!(g.code.starts_with("X1TABCDEF123456"));
        assert_eq!(
            g.components.check_digit,
            compute_eic_check_digit("X1TABCDEF123456").unwrap().to_string()
        );
    }

    #[test]
    fn unknown_office_rejected() {
        let err = generator()
            .generate(&EicRequest::new("99", "X"))
            .unwrap_err();
        assert_eq!(
            err,
            GenerateError::Parameter(ParameterError::UnknownOfficeId("99".into()))
        );
    }

    #[test]
    fn unknown_entity_rejected() {
        let err = generator()
            .generate(&EicRequest::new("27", "Q"))
            .unwrap_err();
        assert_eq!(
            err,
            GenerateError::Parameter(ParameterError::UnknownEntityType("Q".into()))
        );
    }

    #[test]
    fn multi_character_entity_rejected() {
        assert!(generator().generate(&EicRequest::new("27", "XX")).is_err());
        assert!(generator().generate(&EicRequest::new("2", "X")).is_err());
    }

    #[test]
    fn bad_identifier_rejected() {
        for id in ["SHORT", "GOEPS00000012", "GOEPS-000001", "GOEPS00000ö1", ""] {
            let err = generator()
                .generate(&EicRequest::new("27", "X").individual_id(id))
                .unwrap_err();
            assert!(
                matches!(
                    err,
                    GenerateError::Parameter(ParameterError::InvalidIndividualId { .. })
                ),
                "{id}: {err}"
            );
        }
    }

    #[test]
    fn bulk_unique() {
        let batch = generator().generate_bulk("27", "X", 50).unwrap();
        assert_eq!(batch.count, 50);
        let mut codes = batch.codes.clone();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 50);
        assert!(batch.codes.iter().all(|c| c.starts_with("27X")));
    }

    #[test]
    fn bulk_bounds() {
        assert!(generator().generate_bulk("27", "X", 0).is_err());
        assert!(generator().generate_bulk("27", "X", DEFAULT_MAX_BULK).is_ok());
        assert_eq!(
            generator()
                .generate_bulk("27", "X", DEFAULT_MAX_BULK + 1)
                .unwrap_err(),
            GenerateError::Parameter(ParameterError::CountOutOfRange {
                requested: DEFAULT_MAX_BULK + 1,
                max: DEFAULT_MAX_BULK,
            })
        );
    }

    #[test]
    fn bulk_checks_parameters_first() {
        let err = generator().generate_bulk("99", "X", 0).unwrap_err();
        assert_eq!(
            err,
            GenerateError::Parameter(ParameterError::UnknownOfficeId("99".into()))
        );
    }

    #[test]
    fn configurable_limits() {
        let g = generator().with_max_bulk(500).with_max_attempts(4);
        assert_eq!(g.limits().max_bulk, 500);
        assert_eq!(g.limits().attempts_per_code, 4);
        assert_eq!(g.generate_bulk("10", "Y", 250).unwrap().count, 250);
    }
}
