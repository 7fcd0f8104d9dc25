//! CSV parsing with a single header row.

use ::csv::{ReaderBuilder, StringRecord};

use flood_model::{ImportValue, ImportedRecord};

use crate::error::{IngestError, Result};

/// Parse the header row and the first data row of a CSV document.
///
/// Rows after the first data row are never read. Cells and header names are
/// taken as-is (no trimming); a UTF-8 BOM before the first header is removed.
///
/// Fails with [`IngestError::EmptyOrMalformed`] when the content has no
/// header, no data row, invalid UTF-8, or a first row whose field count
/// differs from the header.
pub fn parse_csv_record(content: &[u8]) -> Result<ImportedRecord> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(content);

    let headers = reader.headers().map_err(malformed)?.clone();
    if headers.is_empty() {
        return Err(IngestError::EmptyOrMalformed {
            reason: "missing header row".to_string(),
        });
    }

    let mut row = StringRecord::new();
    let has_row = reader.read_record(&mut row).map_err(malformed)?;
    if !has_row {
        return Err(IngestError::EmptyOrMalformed {
            reason: "no data rows".to_string(),
        });
    }

    let mut record = ImportedRecord::new();
    for (idx, (header, value)) in headers.iter().zip(row.iter()).enumerate() {
        let header = if idx == 0 {
            header.trim_start_matches('\u{feff}')
        } else {
            header
        };
        record.push(header, ImportValue::Text(value.to_string()));
    }
    Ok(record)
}

fn malformed(err: ::csv::Error) -> IngestError {
    IngestError::EmptyOrMalformed {
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(record: &ImportedRecord, key: &str) -> Option<String> {
        record
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, value)| value.to_field_text())
    }

    #[test]
    fn test_reads_first_row_only() {
        let record = parse_csv_record(b"river_level,land_use\n2.5,urban\n9.9,rural\n").unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(text_of(&record, "river_level").as_deref(), Some("2.5"));
        assert_eq!(text_of(&record, "land_use").as_deref(), Some("urban"));
    }

    #[test]
    fn test_later_rows_are_not_checked() {
        let record = parse_csv_record(b"a,b\n1,2\n3,4,5,6\n").unwrap();
        assert_eq!(text_of(&record, "b").as_deref(), Some("2"));
    }

    #[test]
    fn test_quoted_values() {
        let record = parse_csv_record(b"land_use,slope\n\"urban, dense\",\"4\"\n").unwrap();
        assert_eq!(text_of(&record, "land_use").as_deref(), Some("urban, dense"));
        assert_eq!(text_of(&record, "slope").as_deref(), Some("4"));
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let record = parse_csv_record(b"land_use\n urban \n").unwrap();
        assert_eq!(text_of(&record, "land_use").as_deref(), Some(" urban "));
    }

    #[test]
    fn test_strips_bom() {
        let record = parse_csv_record("\u{feff}elevation\n100\n".as_bytes()).unwrap();
        assert_eq!(text_of(&record, "elevation").as_deref(), Some("100"));
    }

    #[test]
    fn test_header_only_is_empty() {
        let err = parse_csv_record(b"rainfall_intensity,temperature\n").unwrap_err();
        assert!(matches!(
            err,
            IngestError::EmptyOrMalformed { ref reason } if reason == "no data rows"
        ));
    }

    #[test]
    fn test_empty_content() {
        let err = parse_csv_record(b"").unwrap_err();
        assert!(matches!(err, IngestError::EmptyOrMalformed { .. }));
    }

    #[test]
    fn test_ragged_first_row_is_malformed() {
        let err = parse_csv_record(b"a,b,c\n1,2\n").unwrap_err();
        assert!(matches!(err, IngestError::EmptyOrMalformed { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let err = parse_csv_record(b"land_use\n\xFF\xFE\n").unwrap_err();
        assert!(matches!(err, IngestError::EmptyOrMalformed { .. }));
    }
}
