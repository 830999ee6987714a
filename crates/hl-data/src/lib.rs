//! # hl-data
//!
//! Per-year holiday data: the JSON models, where they are loaded from, the
//! process-lifetime cache in front of the loader, and the queries answered
//! from it.
//!
//! ```
//! use hl_data::{HolidayService, MemorySource, YearData, YearDataStore};
//!
//! let data: YearData = serde_json::from_str(
//!     r#"{"holidays": [{"name": "New Year", "start": "2024-01-01", "end": "2024-01-01"}],
//!         "work": [{"name": "Makeup", "date": "2024-01-06"}]}"#,
//! ).unwrap();
//!
//! let store = YearDataStore::new(MemorySource::new().with_year("2024", data));
//! let service = HolidayService::new(store.into());
//!
//! let workdays = service.workdays("2024").unwrap();
//! assert_eq!(workdays[0].to_string(), "2024-01-02");
//! assert_eq!(service.holiday("2024", "new year").unwrap().name, "New Year");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Holiday`, `Workday`, and `YearData`.
pub mod models;

/// Query layer used by transports.
pub mod service;

/// `YearDataSource` trait and its file-backed and in-memory implementations.
pub mod source;

/// Lazily populated year-data cache.
pub mod store;

/// Workday calculation.
pub mod workdays;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use models::{Holiday, Workday, YearData};
pub use service::HolidayService;
pub use source::{JsonDirSource, MemorySource, SourceError, YearDataSource};
pub use store::YearDataStore;
pub use workdays::calculate_workdays;
