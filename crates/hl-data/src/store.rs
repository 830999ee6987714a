//! Lazily populated, never-evicted year-data cache.
//!
//! The first [`YearDataStore::get`] for a year goes to the source; every
//! later call is answered from memory for the life of the process.  Loading
//! happens outside the lock, so two threads asking for the same uncached year
//! at once may both load it.  The first value inserted wins and every caller
//! receives that same `Arc`.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use hl_core::errors::{Error, Result};
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::models::YearData;
use crate::source::YearDataSource;

/// Year-keyed cache in front of a [`YearDataSource`].
#[derive(Debug)]
pub struct YearDataStore {
    source: Arc<dyn YearDataSource>,
    cache: RwLock<HashMap<String, Arc<YearData>>>,
}

impl YearDataStore {
    /// Create an empty store reading from `source`.
    pub fn new(source: impl YearDataSource + 'static) -> Self {
        Self::with_shared_source(Arc::new(source))
    }

    /// Create an empty store reading from a source the caller keeps a handle
    /// to.
    pub fn with_shared_source(source: Arc<dyn YearDataSource>) -> Self {
        Self {
            source,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Return the data for `year`, loading it on first use.
    ///
    /// # Errors
    /// Any source failure (missing, unreadable, malformed, or invalid data)
    /// is logged and reported as [`Error::NotFound`].  Failures are not
    /// cached; the next call tries the source again.
    pub fn get(&self, year: &str) -> Result<Arc<YearData>> {
        if let Some(data) = self.cache.read().get(year) {
            debug!(year, "year data cache hit");
            return Ok(Arc::clone(data));
        }

        let loaded = match self.source.load(year) {
            Ok(data) => Arc::new(data),
            Err(e) => {
                warn!(year, source = %self.source.describe(), error = %e, "year data unavailable");
                return Err(Error::not_found(format!("no data for year {year}")));
            }
        };

        let (data, inserted) = self.insert(year, loaded);
        if inserted {
            info!(
                year,
                holidays = data.holidays.len(),
                workdays = data.work.len(),
                "loaded year data"
            );
        } else {
            debug!(year, "year data loaded concurrently, keeping cached value");
        }
        Ok(data)
    }

    /// Cache `loaded` unless another caller got there first.  Returns the
    /// cached value and whether it is `loaded`.
    fn insert(&self, year: &str, loaded: Arc<YearData>) -> (Arc<YearData>, bool) {
        match self.cache.write().entry(year.to_string()) {
            Entry::Occupied(existing) => (Arc::clone(existing.get()), false),
            Entry::Vacant(slot) => (Arc::clone(slot.insert(loaded)), true),
        }
    }

    /// Return `true` if `year` is already cached.
    pub fn is_cached(&self, year: &str) -> bool {
        self.cache.read().contains_key(year)
    }

    /// Cached year keys, ascending.
    pub fn cached_years(&self) -> Vec<String> {
        let mut years: Vec<String> = self.cache.read().keys().cloned().collect();
        years.sort();
        years
    }

    /// Load each of `years` into the cache.
    ///
    /// Failures are logged by [`get`](Self::get) and skipped.  Returns how
    /// many years are cached afterwards out of those requested.
    pub fn preload<S: AsRef<str>>(&self, years: &[S]) -> usize {
        years
            .iter()
            .filter(|y| self.get((*y).as_ref()).is_ok())
            .count()
    }
}
