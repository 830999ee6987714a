//! Where year data comes from.
//!
//! A [`YearDataSource`] turns a year key into a validated [`YearData`] or a
//! [`SourceError`] saying why it could not.  The store above it decides what
//! callers get to see of that error.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use hl_core::utilities::is_year_key;
use thiserror::Error;

use crate::models::YearData;

/// Why a source could not produce data for a year.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source has no entry for this year.
    #[error("no data for year {year}")]
    Missing {
        /// Requested year key.
        year: String,
    },

    /// The entry exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },

    /// The entry is not a valid year-data document.
    #[error("malformed data for year {year}: {source}")]
    Malformed {
        /// Requested year key.
        year: String,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// The document parsed but breaks a data invariant.
    #[error("invalid data for year {year}: {reason}")]
    Invalid {
        /// Requested year key.
        year: String,
        /// Which invariant failed.
        reason: String,
    },
}

/// A keyed, read-only supplier of [`YearData`].
pub trait YearDataSource: std::fmt::Debug + Send + Sync {
    /// Short description used in log lines (e.g. the data directory).
    fn describe(&self) -> String;

    /// Load and validate the data for `year`.
    fn load(&self, year: &str) -> Result<YearData, SourceError>;
}

fn check(year: &str, data: YearData) -> Result<YearData, SourceError> {
    data.validate().map_err(|e| SourceError::Invalid {
        year: year.to_string(),
        reason: e.to_string(),
    })?;
    Ok(data)
}

// ── JSON directory ────────────────────────────────────────────────────────────

/// Reads `<dir>/<year>.json`.
///
/// Keys that are not exactly four digits are reported as
/// [`SourceError::Missing`] without touching the filesystem, so a key can
/// never name a path outside `dir`.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    /// Create a source rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `year`.
    pub fn path_for(&self, year: &str) -> PathBuf {
        self.dir.join(format!("{year}.json"))
    }
}

impl YearDataSource for JsonDirSource {
    fn describe(&self) -> String {
        format!("json:{}", self.dir.display())
    }

    fn load(&self, year: &str) -> Result<YearData, SourceError> {
        if !is_year_key(year) {
            return Err(SourceError::Missing {
                year: year.to_string(),
            });
        }
        let path = self.path_for(year);
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SourceError::Missing {
                    year: year.to_string(),
                })
            }
            Err(source) => return Err(SourceError::Io { path, source }),
        };
        let data: YearData = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            SourceError::Malformed {
                year: year.to_string(),
                source,
            }
        })?;
        check(year, data)
    }
}

// ── In memory ─────────────────────────────────────────────────────────────────

/// A fixed map of year data held in memory.
///
/// Counts calls to [`load`](YearDataSource::load), which makes it handy for
/// checking how often a store goes back to its source.
#[derive(Debug, Default)]
pub struct MemorySource {
    years: HashMap<String, YearData>,
    loads: AtomicUsize,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the data for `year`.
    pub fn with_year(mut self, year: impl Into<String>, data: YearData) -> Self {
        self.years.insert(year.into(), data);
        self
    }

    /// Number of `load` calls so far, successful or not.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }
}

impl YearDataSource for MemorySource {
    fn describe(&self) -> String {
        format!("memory:{} years", self.years.len())
    }

    fn load(&self, year: &str) -> Result<YearData, SourceError> {
        self.loads.fetch_add(1, Ordering::Relaxed);
        let data = self
            .years
            .get(year)
            .cloned()
            .ok_or_else(|| SourceError::Missing {
                year: year.to_string(),
            })?;
        check(year, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const DOC_2024: &str = r#"{
        "holidays": [{"name": "New Year", "start": "2024-01-01", "end": "2024-01-01"}],
        "work": [{"name": "Makeup", "date": "2024-01-06"}]
    }"#;

    fn dir_with(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in files {
            fs::write(dir.path().join(name), body).unwrap();
        }
        dir
    }

    #[test]
    fn json_dir_loads_year() {
        let dir = dir_with(&[("2024.json", DOC_2024)]);
        let source = JsonDirSource::new(dir.path());
        let data = source.load("2024").unwrap();
        assert_eq!(data.holidays[0].name, "New Year");
        assert_eq!(data.work.len(), 1);
        assert!(source.describe().starts_with("json:"));
    }

    #[test]
    fn json_dir_missing_file() {
        let dir = dir_with(&[]);
        let err = JsonDirSource::new(dir.path()).load("2030").unwrap_err();
        assert!(matches!(err, SourceError::Missing { ref year } if year == "2030"));
    }

    #[test]
    fn json_dir_rejects_non_year_keys() {
        let dir = dir_with(&[("secret.json", DOC_2024)]);
        let source = JsonDirSource::new(dir.path().join("sub"));
        for key in ["../secret", "secret", "20245", ""] {
            assert!(
                matches!(source.load(key), Err(SourceError::Missing { .. })),
                "key {key:?} should be missing"
            );
        }
    }

    #[test]
    fn json_dir_malformed_json() {
        let dir = dir_with(&[("2024.json", "{\"holidays\": [")]);
        let err = JsonDirSource::new(dir.path()).load("2024").unwrap_err();
        assert!(matches!(err, SourceError::Malformed { .. }));
    }

    #[test]
    fn json_dir_reversed_range() {
        let doc = r#"{"holidays": [{"name": "X", "start": "2024-05-05", "end": "2024-05-01"}]}"#;
        let dir = dir_with(&[("2024.json", doc)]);
        let err = JsonDirSource::new(dir.path()).load("2024").unwrap_err();
        assert!(matches!(err, SourceError::Invalid { .. }));
        assert!(err.to_string().contains("invalid data for year 2024"));
    }

    #[test]
    fn json_dir_directory_in_place_of_file() {
        let dir = dir_with(&[]);
        fs::create_dir(dir.path().join("2024.json")).unwrap();
        let err = JsonDirSource::new(dir.path()).load("2024").unwrap_err();
        assert!(!matches!(err, SourceError::Missing { .. }));
    }

    #[test]
    fn memory_source_counts_loads() {
        let source = MemorySource::new().with_year("2024", serde_json::from_str(DOC_2024).unwrap());
        assert!(source.load("2024").is_ok());
        assert!(matches!(source.load("2025"), Err(SourceError::Missing { .. })));
        assert_eq!(source.load_count(), 2);
    }
}
