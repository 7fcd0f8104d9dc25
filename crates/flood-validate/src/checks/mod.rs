//! Field checks.

pub mod required;
