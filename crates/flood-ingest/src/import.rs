//! Import entry points.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::csv::parse_csv_record;
use crate::error::{IngestError, Result};
use crate::format::ImportFormat;
use crate::json::parse_json_record;
use crate::normalize::{ImportOutcome, normalize_record};

/// Import uploaded content.
///
/// `file_name` is only used to pick the parser from its extension.
pub fn import_bytes(file_name: &str, content: &[u8]) -> Result<ImportOutcome> {
    let format = ImportFormat::from_file_name(file_name)?;
    let record = match format {
        ImportFormat::Json => parse_json_record(content)?,
        ImportFormat::Csv => parse_csv_record(content)?,
    };
    let outcome = normalize_record(&record);
    info!(
        file_name,
        format = %format,
        imported = outcome.summary.imported_count(),
        ignored = outcome.summary.ignored.len(),
        "import complete"
    );
    Ok(outcome)
}

/// Import a file from disk.
///
/// The extension is checked before the file is read.
pub fn import_file(path: &Path) -> Result<ImportOutcome> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    ImportFormat::from_file_name(&file_name)?;

    let content = std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    import_bytes(&file_name, &content)
}

/// Import a file from disk without blocking the async runtime.
pub async fn import_file_async(path: PathBuf) -> Result<ImportOutcome> {
    tokio::task::spawn_blocking(move || import_file(&path))
        .await
        .map_err(|e| IngestError::Task {
            message: e.to_string(),
        })?
}

#[cfg(test)]
mod tests {
    use super::*;
    use flood_model::FieldName;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_import_bytes_json() {
        let outcome = import_bytes("x.json", br#"{"elevation": 100}"#).unwrap();
        assert_eq!(outcome.fields.get(FieldName::Elevation), "100");
    }

    #[test]
    fn test_import_file_missing() {
        let err = import_file(Path::new("/nonexistent/dir/readings.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileRead { .. }));
    }

    #[test]
    fn test_import_file_checks_format_first() {
        let err = import_file(Path::new("/nonexistent/dir/readings.txt")).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
    }

    #[tokio::test]
    async fn test_import_file_async() {
        let mut file = Builder::new().suffix(".CSV").tempfile().unwrap();
        write!(file, "temperature,humidity\n25,80\n").unwrap();

        let outcome = import_file_async(file.path().to_path_buf()).await.unwrap();
        assert_eq!(outcome.fields.get(FieldName::Temperature), "25");
        assert_eq!(outcome.fields.get(FieldName::Humidity), "80");
    }
}
