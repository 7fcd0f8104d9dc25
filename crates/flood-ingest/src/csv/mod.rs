//! CSV reading utilities.

mod reader;

pub use reader::parse_csv_record;
