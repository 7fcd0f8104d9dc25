//! Validation of flood form values before submission.
//!
//! Validation is a presence check only: each required field must hold a
//! non-empty string. Ranges, types and cross-field consistency are not
//! checked.

mod checks;
mod issue;
mod result;

pub use issue::{Issue, Severity};
pub use result::ValidationResult;

use flood_model::FieldSet;
use tracing::debug;

/// Validate a field set.
///
/// Issues are reported in the declared order of the required fields,
/// independent of how the values were entered.
pub fn validate(fields: &FieldSet) -> ValidationResult {
    let issues = checks::required::check(fields);
    debug!(issue_count = issues.len(), "validation complete");
    ValidationResult::new(issues)
}
