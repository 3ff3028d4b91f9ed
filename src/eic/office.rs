//! Issuing office identifiers (first two characters of an EIC).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::ParameterError;

/// A recognised EIC issuing office prefix.
///
/// Only values from the recognised table can be constructed: numeric
/// offices `10`-`59` and the alphanumeric ranges `X1`-`X9`, `Y1`-`Y9`,
/// `Z1`-`Z9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OfficeId(&'static str);

impl OfficeId {
    /// Look up an office identifier. Case-sensitive: EIC codes are upper-case.
    pub fn parse(code: &str) -> Option<Self> {
        OFFICE_IDS
            .binary_search(&code)
            .ok()
            .map(|i| Self(OFFICE_IDS[i]))
    }

    /// The two-character prefix.
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Whether this is one of the numeric offices `10`-`59`.
    pub fn is_numeric(&self) -> bool {
        self.0.bytes().all(|b| b.is_ascii_digit())
    }

    /// Every recognised office identifier, in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        OFFICE_IDS.iter().map(|&code| Self(code))
    }
}

impl fmt::Display for OfficeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl FromStr for OfficeId {
    type Err = ParameterError;

    /// Case-insensitive parse for caller-supplied generation parameters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(&s.trim().to_ascii_uppercase())
            .ok_or_else(|| ParameterError::UnknownOfficeId(s.into()))
    }
}

/// Check whether `code` is a recognised EIC office identifier.
pub fn is_known_office_id(code: &str) -> bool {
    OfficeId::parse(code).is_some()
}

/// Recognised office identifiers (77 entries). Sorted for binary search.
static OFFICE_IDS: &[&str] = &[
    "10", "11", "12", "13", "14", "15", "16", "17", "18", "19",
    "20", "21", "22", "23", "24", "25", "26", "27", "28", "29",
    "30", "31", "32", "33", "34", "35", "36", "37", "38", "39",
    "40", "41", "42", "43", "44", "45", "46", "47", "48", "49",
    "50", "51", "52", "53", "54", "55", "56", "57", "58", "59",
    "X1", "X2", "X3", "X4", "X5", "X6", "X7", "X8", "X9",
    "Y1", "Y2", "Y3", "Y4", "Y5", "Y6", "Y7", "Y8", "Y9",
    "Z1", "Z2", "Z3", "Z4", "Z5", "Z6", "Z7", "Z8", "Z9",
];
