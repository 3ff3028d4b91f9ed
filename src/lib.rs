//! # energycode
//!
//! Check-digit validation and generation for energy-sector identifiers:
//! ENTSO-E Energy Identification Codes (EIC, ISO 7064 Mod 37,36) and
//! GS1 article numbers (EAN-8, EAN-13, EAN-14, Mod 10).
//!
//! Validation never fails with an error: every input yields a
//! [`ValidationResult`] carrying a verdict, the issues found, and the
//! parsed fields when the length allowed parsing. Generation returns
//! `Result<_, GenerateError>` and rejects bad parameters before drawing
//! anything.
//!
//! ## Quick Start
//!
//! ```rust
//! use energycode::eic::{generate_eic, validate_eic};
//! use energycode::ean::{EanFormat, generate_ean_bulk, validate_ean};
//!
//! assert!(validate_eic("27XGOEPS0000001I").is_valid);
//!
//! let result = validate_eic("27XGOEPS0000001J");
//! assert_eq!(
//!     result.summary().as_deref(),
//!     Some("invalid check digit: expected 'I', found 'J'")
//! );
//!
//! let eic = generate_eic("10", "Y", None).unwrap();
//! assert!(validate_eic(&eic.code).is_valid);
//!
//! let batch = generate_ean_bulk(EanFormat::Ean13, 10).unwrap();
//! assert!(batch.codes.iter().all(|c| validate_ean(c).is_valid));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `eic` (default) | EIC validation, generation, office and entity tables |
//! | `ean` (default) | EAN-8/13/14 validation and generation |
//! | `all` | Everything |

pub mod core;

#[cfg(feature = "eic")]
pub mod eic;

#[cfg(feature = "ean")]
pub mod ean;

// Re-export core types at crate root for convenience
pub use crate::core::*;
