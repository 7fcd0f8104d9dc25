//! Mapping of parsed records onto the field schema.

use flood_model::{FieldName, FieldSet, ImportedRecord};
use tracing::debug;

/// What an import changed, for status output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Schema fields that received a value from the file.
    pub imported: Vec<FieldName>,
    /// Keys in the file that are not schema fields.
    pub ignored: Vec<String>,
    /// Schema fields whose value could not be turned into text.
    pub unsupported: Vec<FieldName>,
}

impl ImportSummary {
    pub fn imported_count(&self) -> usize {
        self.imported.len()
    }
}

/// A freshly built field set and the summary of how it was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub fields: FieldSet,
    pub summary: ImportSummary,
}

/// Build a field set from defaults overlaid with the record's schema keys.
///
/// The result never carries over values from a previous form state. Keys
/// are matched exactly; if a key appears twice the later value wins.
pub fn normalize_record(record: &ImportedRecord) -> ImportOutcome {
    let mut fields = FieldSet::new();
    let mut summary = ImportSummary::default();

    for (key, value) in record.iter() {
        let Some(name) = FieldName::parse(key) else {
            debug!(key, "ignoring key outside the field schema");
            summary.ignored.push(key.to_string());
            continue;
        };

        match value.to_field_text() {
            Some(text) => {
                fields.set(name, text);
                if !summary.imported.contains(&name) {
                    summary.imported.push(name);
                }
            }
            None => {
                debug!(field = %name, kind = value.kind(), "keeping default for non-scalar value");
                if !summary.unsupported.contains(&name) {
                    summary.unsupported.push(name);
                }
            }
        }
    }

    ImportOutcome { fields, summary }
}
