//! CLI library components for the flood intake form.

pub mod input;
pub mod logging;
