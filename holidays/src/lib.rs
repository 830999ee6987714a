//! # holidays
//!
//! Public-holiday and workday lookups over per-year JSON data.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `hl-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! holidays = "0.1"
//! ```
//!
//! ```rust
//! use holidays::data::{calculate_workdays, YearData};
//!
//! let data: YearData = serde_json::from_str(
//!     r#"{"holidays": [{"name": "New Year", "start": "2024-01-01", "end": "2024-01-01"}],
//!         "work": [{"name": "Makeup", "date": "2024-01-06"}]}"#,
//! )
//! .unwrap();
//!
//! let days = calculate_workdays("2024", &data).unwrap();
//! assert_eq!(days.len(), 262);
//! assert_eq!(days[4].to_string(), "2024-01-06");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error taxonomy, settings, and parsing helpers.
pub use hl_core as core;

/// Dates, weekdays, date ranges, and workday calendars.
pub use hl_time as time;

/// Year-data models, sources, cache, and queries.
pub use hl_data as data;

/// HTTP transport.
pub use hl_server as server;
