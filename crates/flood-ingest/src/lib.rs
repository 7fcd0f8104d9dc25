//! Flood form data import.
//!
//! This crate turns an uploaded file into a complete [`FieldSet`]:
//!
//! - **Format Detection**: `.json` or `.csv`, case-insensitive, from the file name
//! - **JSON**: a single top-level object
//! - **CSV**: a header row plus at least one data row; only the first row is used
//! - **Normalization**: defaults first, then every schema key found in the file
//!
//! Unknown keys are dropped. Fields the file does not mention keep their
//! default value, so an import always replaces the whole form.
//!
//! # Example
//!
//! ```
//! use flood_ingest::import_bytes;
//! use flood_model::FieldName;
//!
//! let outcome = import_bytes("station.json", br#"{"river_level": 2.5, "site": "A"}"#)?;
//!
//! assert_eq!(outcome.fields.get(FieldName::RiverLevel), "2.5");
//! assert_eq!(outcome.summary.ignored, vec!["site".to_string()]);
//! # Ok::<(), flood_ingest::IngestError>(())
//! ```
//!
//! [`FieldSet`]: flood_model::FieldSet

mod csv;
mod error;
mod format;
mod import;
mod json;
mod normalize;

// === Error Types ===
pub use error::{IngestError, Result};

// === Format Detection ===
pub use format::ImportFormat;

// === Parsers ===
pub use crate::csv::parse_csv_record;
pub use json::parse_json_record;

// === Normalization ===
pub use normalize::{ImportOutcome, ImportSummary, normalize_record};

// === Entry Points ===
pub use import::{import_bytes, import_file, import_file_async};
