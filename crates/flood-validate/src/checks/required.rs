//! Required field checks.
//!
//! A required field is missing when its value is the empty string.
//! Whitespace-only values are present.

use flood_model::{FieldSet, REQUIRED_FIELDS};

use crate::issue::Issue;

/// Check that every required field has a value.
pub fn check(fields: &FieldSet) -> Vec<Issue> {
    REQUIRED_FIELDS
        .iter()
        .filter(|name| fields.is_empty_field(**name))
        .map(|name| Issue::RequiredEmpty { field: *name })
        .collect()
}
