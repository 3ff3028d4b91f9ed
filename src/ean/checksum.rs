//! GS1 Mod 10 check digit.

use crate::core::ParameterError;

/// Check digit over `data`, or `None` if `data` contains anything but `0`-`9`.
///
/// Weights are anchored at the right end: the last data digit is weighted
/// 3, the one before it 1, and so on. Anchoring at the left gives a
/// different (wrong) digit whenever the data length is even.
pub(crate) fn mod10(data: &str) -> Option<char> {
    let mut sum = 0;
    for (i, c) in data.chars().rev().enumerate() {
        let digit = c.to_digit(10)?;
        let weight = if i % 2 == 0 { 3 } else { 1 };
        sum = (sum + digit * weight) % 10;
    }
    char::from_digit((10 - sum) % 10, 10)
}

/// Compute the GS1 check digit for a string of data digits.
///
/// Any non-empty digit string is accepted: the same rule covers
/// GTIN-8/12/13/14, GLN and SSCC.
pub fn compute_ean_check_digit(data: &str) -> Result<char, ParameterError> {
    if data.is_empty() {
        return Err(ParameterError::InvalidCheckInput {
            value: data.into(),
            reason: "no data digits".into(),
        });
    }
    mod10(data).ok_or_else(|| ParameterError::InvalidCheckInput {
        value: data.into(),
        reason: "only digits 0-9 are allowed".into(),
    })
}
