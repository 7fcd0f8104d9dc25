//! Import format detection from the file name.

use std::fmt;

use crate::error::{IngestError, Result};

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportFormat {
    Json,
    Csv,
}

impl ImportFormat {
    /// Detect the format from the extension of `file_name`.
    ///
    /// Only the text after the last `.` is considered, case-insensitively.
    /// A name without a `.` has no extension and is rejected.
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let base = file_name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(file_name);
        let extension = base
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or_default();
        Self::from_extension(extension)
    }

    /// Match an extension (without the dot).
    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(IngestError::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Csv => "CSV",
        }
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_supported_extensions() {
        assert_eq!(ImportFormat::from_file_name("a.json").unwrap(), ImportFormat::Json);
        assert_eq!(ImportFormat::from_file_name("a.csv").unwrap(), ImportFormat::Csv);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(ImportFormat::from_file_name("DATA.JSON").unwrap(), ImportFormat::Json);
        assert_eq!(ImportFormat::from_file_name("readings.Csv").unwrap(), ImportFormat::Csv);
    }

    #[test]
    fn test_uses_last_extension() {
        assert_eq!(
            ImportFormat::from_file_name("backup.json.csv").unwrap(),
            ImportFormat::Csv
        );
        assert!(ImportFormat::from_file_name("data.csv.bak").is_err());
    }

    #[test]
    fn test_ignores_directories() {
        assert_eq!(
            ImportFormat::from_file_name("exports.v2/station").ok(),
            None
        );
        assert_eq!(
            ImportFormat::from_file_name("exports/station.json").unwrap(),
            ImportFormat::Json
        );
    }

    #[test]
    fn test_rejects_other_extensions() {
        let err = ImportFormat::from_file_name("notes.txt").unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnsupportedFormat { ref extension } if extension == "txt"
        ));
        assert!(ImportFormat::from_file_name("README").is_err());
    }
}
