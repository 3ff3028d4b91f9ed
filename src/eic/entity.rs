//! EIC entity (object) types: the third character of an EIC.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::ParameterError;

/// A recognised EIC entity type.
///
/// Only characters from the recognised table can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityType(char);

impl EntityType {
    /// `X`: electrical area.
    pub const ELECTRICAL_AREA: Self = Self('X');
    /// `Y`: transmission system operator.
    pub const TSO: Self = Self('Y');
    /// `T`: transmission system operator control area.
    pub const TSO_CONTROL_AREA: Self = Self('T');
    /// `Z`: metering point.
    pub const METERING_POINT: Self = Self('Z');

    /// Look up an entity type character. Case-sensitive.
    pub fn parse(code: char) -> Option<Self> {
        ENTITY_TYPES
            .binary_search_by_key(&code, |&(c, _)| c)
            .ok()
            .map(|_| Self(code))
    }

    /// Look up a one-character entity type string.
    pub fn from_code(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::parse(c),
            _ => None,
        }
    }

    /// The entity type character.
    pub fn code(&self) -> char {
        self.0
    }

    /// Short description of what codes of this type identify.
    pub fn description(&self) -> &'static str {
        ENTITY_TYPES
            .binary_search_by_key(&self.0, |&(c, _)| c)
            .map_or("", |i| ENTITY_TYPES[i].1)
    }

    /// Every recognised entity type, in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        ENTITY_TYPES.iter().map(|&(c, _)| Self(c))
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityType {
    type Err = ParameterError;

    /// Case-insensitive parse for caller-supplied generation parameters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(&s.trim().to_ascii_uppercase())
            .ok_or_else(|| ParameterError::UnknownEntityType(s.into()))
    }
}

/// Check whether `code` is a recognised one-character entity type.
pub fn is_known_entity_type(code: &str) -> bool {
    EntityType::from_code(code).is_some()
}

/// Recognised entity types (28 entries). Sorted by character for binary search.
static ENTITY_TYPES: &[(char, &str)] = &[
    ('0', "Reserved numeric type 0"),
    ('1', "Reserved numeric type 1"),
    ('2', "Reserved numeric type 2"),
    ('3', "Reserved numeric type 3"),
    ('4', "Reserved numeric type 4"),
    ('5', "Reserved numeric type 5"),
    ('6', "Reserved numeric type 6"),
    ('7', "Reserved numeric type 7"),
    ('8', "Reserved numeric type 8"),
    ('9', "Reserved numeric type 9"),
    ('A', "Generation unit"),
    ('B', "Border point"),
    ('C', "Coordinated capacity calculator"),
    ('D', "Resource provider"),
    ('E', "Party"),
    ('F', "System operator"),
    ('G', "Resource aggregator"),
    ('H', "Tie line"),
    ('L', "Location"),
    ('M', "Market participant"),
    ('P', "Production unit"),
    ('S', "Substation"),
    ('T', "Transmission system operator control area"),
    ('V', "Generation module"),
    ('W', "Generation resource"),
    ('X', "Electrical area"),
    ('Y', "Transmission system operator"),
    ('Z', "Metering point"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types() {
        for code in ["T", "Y", "X", "Z", "A", "V", "W", "B", "1", "0"] {
            assert!(is_known_entity_type(code), "{code} should be known");
        }
    }

    #[test]
    fn unknown_types() {
        for code in ["Q", "I", "@", "-", "", "TX", "x", "Ä"] {
            assert!(!is_known_entity_type(code), "{code} should be unknown");
        }
    }

    #[test]
    fn from_str_folds_case() {
        assert_eq!("t".parse::<EntityType>().unwrap().code(), 'T');
        assert_eq!(
            "q".parse::<EntityType>(),
            Err(ParameterError::UnknownEntityType("q".into()))
        );
    }

    #[test]
    fn constants_are_recognised() {
        for t in [
            EntityType::ELECTRICAL_AREA,
            EntityType::TSO,
            EntityType::TSO_CONTROL_AREA,
            EntityType::METERING_POINT,
        ] {
            assert_eq!(EntityType::parse(t.code()), Some(t));
        }
    }

    #[test]
    fn descriptions() {
        assert_eq!(EntityType::METERING_POINT.description(), "Metering point");
        assert!(EntityType::all().all(|t| !t.description().is_empty()));
    }

    #[test]
    fn list_is_sorted() {
        for window in ENTITY_TYPES.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "entity types not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn list_count() {
        assert_eq!(ENTITY_TYPES.len(), 28);
    }
}
