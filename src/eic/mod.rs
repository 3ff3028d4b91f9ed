//! Energy Identification Codes (ENTSO-E EIC).
//!
//! An EIC is 16 characters from `[0-9A-Z]`:
//!
//! | Offset | Length | Field |
//! |--------|--------|-------|
//! | 0 | 2 | office identifier (`10`-`59`, `X1`-`Z9`) |
//! | 2 | 1 | entity type |
//! | 3 | 12 | individual identifier |
//! | 15 | 1 | check character (ISO 7064 Mod 37,36 over offsets 0-14) |
//!
//! # Example
//!
//! ```rust
//! use energycode::eic::*;
//!
//! let result = validate_eic("27XGOEPS0000001I");
//! assert!(result.is_valid);
//! assert_eq!(result.components.unwrap().individual_id, "GOEPS0000001");
//!
//! let generated = generate_eic("27", "X", None).unwrap();
//! assert!(validate_eic(&generated.code).is_valid);
//!
//! let batch = generate_eic_bulk("10", "Y", 25).unwrap();
//! assert_eq!(batch.count, 25);
//! ```

mod checksum;
mod entity;
mod generate;
mod office;
mod validate;

use serde::{Deserialize, Serialize};

use crate::core::{CodeBatch, GenerateError, Generator, ValidationResult, Validator};

pub use checksum::compute_eic_check_digit;
pub use entity::{EntityType, is_known_entity_type};
pub use generate::{EicGenerator, EicRequest, GeneratedEic};
pub use office::{OfficeId, is_known_office_id};
pub use validate::{EicValidator, normalize_eic};

/// Total length of an EIC.
pub const EIC_LENGTH: usize = 16;
/// Length of the part covered by the check character.
pub const EIC_BASE_LENGTH: usize = 15;
/// Length of the office identifier.
pub const OFFICE_ID_LENGTH: usize = 2;
/// Length of the individual identifier.
pub const INDIVIDUAL_ID_LENGTH: usize = 12;

/// The four fixed-offset fields of an EIC.
///
/// Fields hold whatever was found at their offsets, so they can contain
/// unrecognised values when returned from a failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EicComponents {
    /// Characters 0-1.
    pub office_id: String,
    /// Character 2.
    pub entity_type: String,
    /// Characters 3-14.
    pub individual_id: String,
    /// Character 15.
    pub check_digit: String,
}

impl EicComponents {
    /// Slice a 16-character code. Returns `None` for any other length.
    pub fn from_code(code: &str) -> Option<Self> {
        let chars: Vec<char> = code.chars().collect();
        if chars.len() != EIC_LENGTH {
            return None;
        }
        let take = |skip: usize, n: usize| chars.iter().skip(skip).take(n).collect::<String>();
        Some(Self {
            office_id: take(0, OFFICE_ID_LENGTH),
            entity_type: take(OFFICE_ID_LENGTH, 1),
            individual_id: take(OFFICE_ID_LENGTH + 1, INDIVIDUAL_ID_LENGTH),
            check_digit: take(EIC_BASE_LENGTH, 1),
        })
    }

    /// The 15 characters covered by the check character.
    pub fn base(&self) -> String {
        format!("{}{}{}", self.office_id, self.entity_type, self.individual_id)
    }

    /// The complete code.
    pub fn full_code(&self) -> String {
        format!("{}{}", self.base(), self.check_digit)
    }

    /// The office identifier, if recognised.
    pub fn office(&self) -> Option<OfficeId> {
        OfficeId::parse(&self.office_id)
    }

    /// The entity type, if recognised.
    pub fn entity(&self) -> Option<EntityType> {
        EntityType::from_code(&self.entity_type)
    }
}

/// Validate an EIC with the default (strict) validator.
pub fn validate_eic(code: &str) -> ValidationResult<EicComponents> {
    EicValidator::strict().validate(code)
}

/// Generate one EIC.
///
/// `office_id` and `entity_type` are matched case-insensitively against the
/// recognised sets. Without `individual_id`, 12 random characters are drawn.
pub fn generate_eic(
    office_id: &str,
    entity_type: &str,
    individual_id: Option<&str>,
) -> Result<GeneratedEic, GenerateError> {
    let mut request = EicRequest::new(office_id, entity_type);
    if let Some(id) = individual_id {
        request = request.individual_id(id);
    }
    EicGenerator::new().generate(&request)
}

/// Generate `count` distinct EICs sharing one office and entity type.
///
/// `count` must lie in `1..=`[`DEFAULT_MAX_BULK`](crate::core::DEFAULT_MAX_BULK);
/// use [`EicGenerator::with_max_bulk`] for a different bound.
pub fn generate_eic_bulk(
    office_id: &str,
    entity_type: &str,
    count: usize,
) -> Result<CodeBatch, GenerateError> {
    EicGenerator::new().generate_bulk(office_id, entity_type, count)
}
