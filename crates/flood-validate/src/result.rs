//! Validation result.

use serde::Serialize;

use crate::issue::{Issue, Severity};

/// Ordered issues from one validation run. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    issues: Vec<Issue>,
}

impl ValidationResult {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// Whether nothing blocks submission.
    pub fn is_valid(&self) -> bool {
        !self
            .issues
            .iter()
            .any(|issue| issue.severity() == Severity::Error)
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Human-readable messages in report order.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(Issue::message).collect()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl IntoIterator for ValidationResult {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}
