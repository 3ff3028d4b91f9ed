use std::collections::HashSet;

use tracing::warn;

use super::bulk::{BulkLimits, CodeBatch};
use super::error::GenerateError;

/// Call `draw` until `count` distinct codes are collected or the attempt
/// budget runs out. Only collisions are retried; errors from `draw` abort.
pub(crate) fn draw_unique<F>(
    count: usize,
    limits: &BulkLimits,
    mut draw: F,
) -> Result<CodeBatch, GenerateError>
where
    F: FnMut() -> Result<String, GenerateError>,
{
    limits.check_count(count)?;
    let budget = limits.attempt_budget(count);

    let mut seen = HashSet::with_capacity(count);
    let mut codes = Vec::with_capacity(count);
    let mut attempts = 0;

    while codes.len() < count {
        if attempts >= budget {
            warn!(
                requested = count,
                generated = codes.len(),
                attempts,
                "bulk generation attempt budget exhausted"
            );
            return Err(GenerateError::Exhausted {
                requested: count,
                generated: codes.len(),
                attempts,
            });
        }
        attempts += 1;

        let code = draw()?;
        if seen.insert(code.clone()) {
            codes.push(code);
        } else {
            warn!(%code, attempts, "duplicate code in bulk draw, retrying");
        }
    }

    Ok(CodeBatch::new(codes))
}
