//! ISO 7064 Mod 37,36 check character for EIC codes.

use crate::core::ParameterError;

use super::EIC_BASE_LENGTH;

const MODULUS: u32 = 37;
const RADIX: u32 = 36;

/// Value of an EIC character: `0`-`9` → 0-9, `A`-`Z` → 10-35.
///
/// Lowercase letters and everything else have no value.
pub(crate) fn char_value(c: char) -> Option<u32> {
    if c.is_ascii_digit() || c.is_ascii_uppercase() {
        c.to_digit(RADIX)
    } else {
        None
    }
}

/// Character for a check value. 36 has no symbol of its own and folds onto `0`.
pub(crate) fn value_char(value: u32) -> char {
    char::from_digit(value, RADIX).map_or('0', |c| c.to_ascii_uppercase())
}

/// Raw check value (0..=36) over a sequence of character values.
fn check_value(values: impl IntoIterator<Item = u32>) -> u32 {
    let p = values
        .into_iter()
        .fold(RADIX, |p, v| (p + v) % MODULUS * 2 % MODULUS);
    (MODULUS - p + 1) % MODULUS
}

/// Check character over `base`, or `None` if any character is outside `[0-9A-Z]`.
///
/// Length is not checked here.
pub(crate) fn mod37_36(base: &str) -> Option<char> {
    let values = base.chars().map(char_value).collect::<Option<Vec<_>>>()?;
    Some(value_char(check_value(values)))
}

/// Compute the check character for a 15-character EIC base.
///
/// The base must consist of `0`-`9` and `A`-`Z` only.
pub fn compute_eic_check_digit(base: &str) -> Result<char, ParameterError> {
    let len = base.chars().count();
    if len != EIC_BASE_LENGTH {
        return Err(ParameterError::InvalidCheckInput {
            value: base.into(),
            reason: format!("EIC base must be exactly {EIC_BASE_LENGTH} characters, got {len}"),
        });
    }
    mod37_36(base).ok_or_else(|| ParameterError::InvalidCheckInput {
        value: base.into(),
        reason: "only 0-9 and A-Z are allowed".into(),
    })
}
