//! The three EAN lengths and their labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ParameterError;

/// EAN / GTIN length variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EanFormat {
    /// 8 digits (7 data + check).
    #[serde(rename = "EAN-8")]
    Ean8,
    /// 13 digits (12 data + check).
    #[serde(rename = "EAN-13")]
    Ean13,
    /// 14 digits (13 data + check).
    #[serde(rename = "EAN-14")]
    Ean14,
}

// a format is never empty
#[allow(clippy::len_without_is_empty)]
impl EanFormat {
    /// All formats, shortest first.
    pub const ALL: [Self; 3] = [Self::Ean8, Self::Ean13, Self::Ean14];

    /// Total code length including the check digit.
    pub fn len(&self) -> usize {
        match self {
            Self::Ean8 => 8,
            Self::Ean13 => 13,
            Self::Ean14 => 14,
        }
    }

    /// Number of data digits (total length minus the check digit).
    pub fn data_len(&self) -> usize {
        self.len() - 1
    }

    /// Label as used in requests and reports ("EAN-13").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ean8 => "EAN-8",
            Self::Ean13 => "EAN-13",
            Self::Ean14 => "EAN-14",
        }
    }

    /// Format for a total code length, if it is one of 8, 13, 14.
    pub fn from_length(len: usize) -> Option<Self> {
        match len {
            8 => Some(Self::Ean8),
            13 => Some(Self::Ean13),
            14 => Some(Self::Ean14),
            _ => None,
        }
    }
}

impl fmt::Display for EanFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EanFormat {
    type Err = ParameterError;

    /// Accepts "EAN-13", "ean13", "EAN 13" and the like.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        match key.as_str() {
            "EAN8" => Ok(Self::Ean8),
            "EAN13" => Ok(Self::Ean13),
            "EAN14" => Ok(Self::Ean14),
            _ => Err(ParameterError::UnknownFormat(s.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths() {
        assert_eq!(EanFormat::Ean8.len(), 8);
        assert_eq!(EanFormat::Ean13.data_len(), 12);
        assert_eq!(EanFormat::Ean14.data_len(), 13);
    }

    #[test]
    fn from_length() {
        assert_eq!(EanFormat::from_length(8), Some(EanFormat::Ean8));
        assert_eq!(EanFormat::from_length(13), Some(EanFormat::Ean13));
        assert_eq!(EanFormat::from_length(14), Some(EanFormat::Ean14));
        for len in [0, 7, 9, 12, 15, 18] {
            assert_eq!(EanFormat::from_length(len), None);
        }
    }

    #[test]
    fn length_roundtrip() {
        for f in EanFormat::ALL {
            assert_eq!(EanFormat::from_length(f.len()), Some(f));
        }
    }

    #[test]
    fn parse_labels() {
        assert_eq!("EAN-8".parse::<EanFormat>(), Ok(EanFormat::Ean8));
        assert_eq!("ean-13".parse::<EanFormat>(), Ok(EanFormat::Ean13));
        assert_eq!("ean13".parse::<EanFormat>(), Ok(EanFormat::Ean13));
        assert_eq!("EAN 14".parse::<EanFormat>(), Ok(EanFormat::Ean14));
        assert_eq!(
            "EAN-12".parse::<EanFormat>(),
            Err(ParameterError::UnknownFormat("EAN-12".into()))
        );
        assert!("".parse::<EanFormat>().is_err());
        assert!("UPC-A".parse::<EanFormat>().is_err());
    }

    #[test]
    fn serde_labels() {
        assert_eq!(
            serde_json::to_string(&EanFormat::Ean13).unwrap(),
            "\"EAN-13\""
        );
        let f: EanFormat = serde_json::from_str("\"EAN-8\"").unwrap();
        assert_eq!(f, EanFormat::Ean8);
    }

    #[test]
    fn display_matches_label() {
        for f in EanFormat::ALL {
            assert_eq!(f.to_string(), f.label());
        }
    }
}
