//! Fail-gate: turns error findings into a failure.

use crate::error::{CheckError, Result};
use crate::models::CheckResult;

/// Pass `res` through when it has no errors, otherwise fail with the count.
pub fn fail_after_error(res: &CheckResult) -> Result<&CheckResult> {
    match res.error_count() {
        0 => Ok(res),
        count => Err(CheckError::Failed { count }),
    }
}
