//! JSON object parsing.

use serde_json::Value;

use flood_model::ImportedRecord;

use crate::error::{IngestError, Result};

/// Parse a JSON document whose top-level value is an object.
///
/// A leading UTF-8 BOM is skipped. Arrays, scalars and invalid JSON are
/// rejected with [`IngestError::MalformedInput`].
pub fn parse_json_record(content: &[u8]) -> Result<ImportedRecord> {
    let content = content.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(content);
    let value: Value =
        serde_json::from_slice(content).map_err(|e| IngestError::MalformedInput {
            reason: e.to_string(),
        })?;

    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(IngestError::MalformedInput {
                reason: format!("expected a JSON object, found {}", value_kind(&other)),
            });
        }
    };

    Ok(map
        .into_iter()
        .map(|(key, value)| (key, value.into()))
        .collect())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
