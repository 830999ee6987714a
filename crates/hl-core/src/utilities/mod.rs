//! Miscellaneous utilities.

/// Parsing helpers for year keys and ISO dates.
pub mod data_parsers;

pub use data_parsers::{is_year_key, parse_iso_date, parse_year};
