//! Uniform sampling from fixed alphabets using the operating system CSPRNG.

use rand::Rng;
use rand::rngs::OsRng;

/// EIC alphabet, ordered by ISO 7064 character value.
pub(crate) const ALPHANUMERIC: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// EAN alphabet.
pub(crate) const DIGITS: &[u8] = b"0123456789";

/// Draw `len` characters uniformly from `alphabet`.
///
/// `OsRng` holds no state, so concurrent callers never share a sequence.
pub(crate) fn random_string(alphabet: &[u8], len: usize) -> String {
    let mut rng = OsRng;
    (0..len)
        .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_and_alphabet() {
        let s = random_string(ALPHANUMERIC, 12);
        assert_eq!(s.len(), 12);
        assert!(s.bytes().all(|b| ALPHANUMERIC.contains(&b)));

        let d = random_string(DIGITS, 13);
        assert_eq!(d.len(), 13);
        assert!(d.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn zero_length() {
        assert!(random_string(DIGITS, 0).is_empty());
    }

    #[test]
    fn draws_differ() {
        // 36^12 possibilities; two equal draws in a row would indicate a broken source.
        assert_ne!(random_string(ALPHANUMERIC, 12), random_string(ALPHANUMERIC, 12));
    }

    #[test]
    fn covers_whole_alphabet() {
        let s = random_string(DIGITS, 2000);
        for d in '0'..='9' {
            assert!(s.contains(d), "digit {d} never drawn");
        }
    }
}
