//! Data model for the flood forecasting intake form.
//!
//! This crate provides the closed field schema and the value types shared by
//! the import, validation and submission crates:
//!
//! - [`schema`]: the 23 named fields, their categories and descriptors
//! - [`field_set`]: [`FieldSet`], the complete collection of form values
//! - [`import`]: [`ImportValue`] and [`ImportedRecord`] produced by file parsers
//! - [`submission`]: [`SubmissionState`] driving the submit control
//!
//! # Example
//!
//! ```
//! use flood_model::{FieldName, FieldSet};
//!
//! let mut fields = FieldSet::new();
//! fields.set(FieldName::RiverLevel, "2.5");
//!
//! assert_eq!(fields.get(FieldName::RiverLevel), "2.5");
//! assert_eq!(fields.get(FieldName::PastFlood), "no");
//! ```

pub mod field_set;
pub mod import;
pub mod schema;
pub mod submission;

pub use field_set::FieldSet;
pub use import::{ImportValue, ImportedRecord};
pub use schema::{Category, FIELDS, FieldDescriptor, FieldName, REQUIRED_FIELDS, UnknownFieldError};
pub use submission::SubmissionState;
