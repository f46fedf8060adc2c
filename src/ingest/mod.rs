/// Whole-file byte reading.
pub mod reader;
