//! Form input taken from the command line.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use flood_form::FormState;
use flood_ingest::{ImportSummary, import_file};
use flood_model::FieldName;
use flood_submit::SubmitConfig;

use crate::logging::redact_value;

/// A `--set name=value` edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAssignment {
    pub field: FieldName,
    pub value: String,
}

impl fmt::Display for FieldAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.field, self.value)
    }
}

/// Parse `name=value`. The value may be empty and may contain `=`.
pub fn parse_assignment(raw: &str) -> std::result::Result<FieldAssignment, String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{raw}'"))?;
    let field = FieldName::parse(name).ok_or_else(|| format!("unknown field '{name}'"))?;
    Ok(FieldAssignment {
        field,
        value: value.to_string(),
    })
}

/// Edits in command-line order; later edits to a field win.
pub fn assignment_edits(
    assignments: &[FieldAssignment],
) -> impl Iterator<Item = (FieldName, String)> + '_ {
    assignments.iter().map(|assignment| {
        debug!(
            field = %assignment.field,
            value = redact_value(&assignment.value),
            "applying field edit"
        );
        (assignment.field, assignment.value.clone())
    })
}

/// Build a form from an optional import file followed by edits.
pub fn build_form(
    file: Option<&Path>,
    assignments: &[FieldAssignment],
) -> Result<(FormState, Option<ImportSummary>)> {
    let mut form = FormState::new();
    let summary = match file {
        Some(path) => Some(
            form.apply_import_result(import_file(path))
                .with_context(|| format!("import {}", path.display()))?,
        ),
        None => None,
    };
    form.set_fields(assignment_edits(assignments));
    Ok((form, summary))
}

/// Load the submit timing, then let explicit flags override single delays.
pub fn resolve_submit_config(
    config_path: Option<&Path>,
    send_delay_ms: Option<u64>,
    reset_delay_ms: Option<u64>,
) -> Result<SubmitConfig> {
    let mut config = match config_path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read submit config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parse submit config {}", path.display()))?
        }
        None => SubmitConfig::default(),
    };
    if let Some(delay) = send_delay_ms {
        config.send_delay_ms = delay;
    }
    if let Some(delay) = reset_delay_ms {
        config.reset_delay_ms = delay;
    }
    Ok(config)
}
