//! The complete set of form values.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::schema::FieldName;

/// Mapping from every schema field to its current text value.
///
/// The key set is the schema itself: values live in a fixed-size array
/// indexed by [`FieldName::index`], so no field can be missing or extra.
/// Absent values are the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    values: [String; FieldName::COUNT],
}

impl Default for FieldSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldSet {
    /// Create a field set holding the default value of every field.
    pub fn new() -> Self {
        Self {
            values: std::array::from_fn(|idx| FieldName::ALL[idx].default_value().to_string()),
        }
    }

    /// Current value of a field.
    #[inline]
    pub fn get(&self, name: FieldName) -> &str {
        &self.values[name.index()]
    }

    /// Replace the value of a field.
    pub fn set(&mut self, name: FieldName, value: impl Into<String>) {
        self.values[name.index()] = value.into();
    }

    /// Whether the field holds the empty string.
    ///
    /// Whitespace counts as content.
    #[inline]
    pub fn is_empty_field(&self, name: FieldName) -> bool {
        self.values[name.index()].is_empty()
    }

    /// Whether the field still holds its default value.
    pub fn is_default(&self, name: FieldName) -> bool {
        self.get(name) == name.default_value()
    }

    /// Restore every field to its default.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Iterate over `(field, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        FieldName::ALL
            .iter()
            .map(move |name| (*name, self.values[name.index()].as_str()))
    }

    /// Number of fields whose value differs from the default.
    pub fn changed_count(&self) -> usize {
        FieldName::ALL
            .iter()
            .filter(|name| !self.is_default(**name))
            .count()
    }

    /// Render the field set as pretty-printed JSON, keys in declaration order.
    pub fn to_preview_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for FieldSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FieldName::COUNT))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name.as_str(), value)?;
        }
        map.end()
    }
}
