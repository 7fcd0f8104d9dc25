//! Error types for form data import.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while importing a file into the form.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Format Errors ===
    /// File extension is neither `json` nor `csv`.
    #[error("unsupported file format '{extension}'")]
    UnsupportedFormat { extension: String },

    // === Parse Errors ===
    /// JSON content is not a single valid object.
    #[error("malformed JSON input: {reason}")]
    MalformedInput { reason: String },

    /// CSV content has no data rows or a structural error.
    #[error("empty or malformed CSV input: {reason}")]
    EmptyOrMalformed { reason: String },

    // === File System Errors ===
    /// Failed to read the file from disk.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Background import task did not complete.
    #[error("import task failed: {message}")]
    Task { message: String },
}

impl IngestError {
    /// Message shown in the form's error list.
    pub fn user_message(&self) -> String {
        match self {
            Self::UnsupportedFormat { .. } => {
                "Unsupported file format. Please upload a JSON or CSV file.".to_string()
            }
            Self::MalformedInput { reason } => format!("Invalid JSON file: {reason}"),
            Self::EmptyOrMalformed { reason } => format!("Error parsing CSV file: {reason}"),
            Self::FileRead { path, .. } => {
                format!("Could not read the file at {}", path.display())
            }
            Self::Task { .. } => "The import could not be completed.".to_string(),
        }
    }
}

/// Result type for import operations.
pub type Result<T> = std::result::Result<T, IngestError>;
