//! Untyped records produced by file parsers.

use std::fmt;

use serde_json::{Number, Value};

/// A single scalar read from an import file.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportValue {
    /// Text, used verbatim.
    Text(String),
    /// JSON number. Whole floats drop the fraction, so `1e2` reads `100`.
    Number(Number),
    /// JSON boolean, rendered as `true` / `false`.
    Bool(bool),
    /// Null, arrays and nested objects. These never reach a field.
    Unsupported,
}

impl ImportValue {
    /// Text a field receives from this value, if any.
    pub fn to_field_text(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Number(number) => Some(number_text(number)),
            Self::Bool(flag) => Some(flag.to_string()),
            Self::Unsupported => None,
        }
    }

    /// Short type name for log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::Bool(_) => "bool",
            Self::Unsupported => "unsupported",
        }
    }
}

/// Integers and fractional floats keep serde_json's text. Whole floats
/// below 1e21 print as integers, and `-0.0` prints as `0`.
fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e21 => {
            if value == 0.0 {
                "0".to_string()
            } else {
                format!("{value:.0}")
            }
        }
        _ => number.to_string(),
    }
}

impl From<Value> for ImportValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Number(number) => Self::Number(number),
            Value::Bool(flag) => Self::Bool(flag),
            Value::Null | Value::Array(_) | Value::Object(_) => Self::Unsupported,
        }
    }
}

impl From<&str> for ImportValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for ImportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_field_text() {
            Some(text) => f.write_str(&text),
            None => f.write_str("<unsupported>"),
        }
    }
}

/// Key/value pairs parsed from one uploaded file, in file order.
///
/// Keys are arbitrary; the normalizer decides which ones map to fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportedRecord {
    entries: Vec<(String, ImportValue)>,
}

impl ImportedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<ImportValue>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ImportValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl FromIterator<(String, ImportValue)> for ImportedRecord {
    fn from_iter<I: IntoIterator<Item = (String, ImportValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
