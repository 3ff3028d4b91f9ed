use serde::{Deserialize, Serialize};

use super::error::ParameterError;

/// Default upper bound on codes per bulk request.
pub const DEFAULT_MAX_BULK: usize = 100;

/// Default number of random draws allowed per requested code.
pub const DEFAULT_ATTEMPTS_PER_CODE: usize = 16;

/// Limits applied to bulk generation.
///
/// The attempt budget for a batch of `n` codes is `n * attempts_per_code`;
/// collisions consume attempts, so a nearly exhausted code space ends in
/// [`GenerateError::Exhausted`](super::GenerateError::Exhausted) instead of
/// looping forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkLimits {
    /// Largest batch a single request may ask for.
    pub max_bulk: usize,
    /// Random draws allowed per requested code.
    pub attempts_per_code: usize,
}

impl Default for BulkLimits {
    fn default() -> Self {
        Self {
            max_bulk: DEFAULT_MAX_BULK,
            attempts_per_code: DEFAULT_ATTEMPTS_PER_CODE,
        }
    }
}

impl BulkLimits {
    /// Reject counts of zero or above `max_bulk`.
    pub fn check_count(&self, count: usize) -> Result<(), ParameterError> {
        if count == 0 || count > self.max_bulk {
            return Err(ParameterError::CountOutOfRange {
                requested: count,
                max: self.max_bulk,
            });
        }
        Ok(())
    }

    /// Total draws allowed for a batch of `count` codes.
    pub fn attempt_budget(&self, count: usize) -> usize {
        count.saturating_mul(self.attempts_per_code.max(1))
    }
}

/// A batch of unique generated codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBatch {
    /// Generated codes in draw order, no duplicates.
    pub codes: Vec<String>,
    /// Number of codes (always `codes.len()`).
    pub count: usize,
}

impl CodeBatch {
    /// Wrap a list of codes.
    pub fn new(codes: Vec<String>) -> Self {
        let count = codes.len();
        Self { codes, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_bounds() {
        let limits = BulkLimits::default();
        assert!(limits.check_count(1).is_ok());
        assert!(limits.check_count(DEFAULT_MAX_BULK).is_ok());
        assert_eq!(
            limits.check_count(0),
            Err(ParameterError::CountOutOfRange {
                requested: 0,
                max: DEFAULT_MAX_BULK
            })
        );
        assert!(limits.check_count(DEFAULT_MAX_BULK + 1).is_err());
    }

    #[test]
    fn budget_never_zero_per_code() {
        let limits = BulkLimits {
            max_bulk: 10,
            attempts_per_code: 0,
        };
        assert_eq!(limits.attempt_budget(5), 5);
    }
}
