//! Validation issue types.

use serde::{Deserialize, Serialize};

use flood_model::FieldName;

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Blocks submission
    Error,
}

impl Severity {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
        }
    }
}

/// Validation issue - each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Issue {
    /// Required field holds the empty string
    RequiredEmpty { field: FieldName },
}

impl Issue {
    /// Field the issue refers to.
    pub fn field(&self) -> FieldName {
        match self {
            Issue::RequiredEmpty { field } => *field,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Issue::RequiredEmpty { .. } => Severity::Error,
        }
    }

    /// Message shown in the form's error list.
    pub fn message(&self) -> String {
        match self {
            Issue::RequiredEmpty { field } => format!("{} is required", field.display_name()),
        }
    }
}
