//! The three queries the service answers.
//!
//! [`HolidayService`] is what a transport (HTTP, CLI, …) holds on to.  It is
//! cheap to clone; clones share one [`YearDataStore`].

use std::sync::Arc;

use hl_core::errors::{Error, Result};
use hl_core::utilities::parse_year;
use hl_time::Date;

use crate::models::Holiday;
use crate::store::YearDataStore;
use crate::workdays::calculate_workdays;

/// Holiday and workday queries over a shared [`YearDataStore`].
#[derive(Debug, Clone)]
pub struct HolidayService {
    store: Arc<YearDataStore>,
}

impl HolidayService {
    /// Create a service backed by `store`.
    pub fn new(store: Arc<YearDataStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &YearDataStore {
        &self.store
    }

    /// All holidays of `year`, in document order.
    ///
    /// # Errors
    /// [`Error::NotFound`] if there is no data for `year`.
    pub fn holidays(&self, year: &str) -> Result<Vec<Holiday>> {
        Ok(self.store.get(year)?.holidays.clone())
    }

    /// The holiday of `year` named `name`, compared case-insensitively.
    ///
    /// # Errors
    /// [`Error::NotFound`] if there is no data for `year` or no holiday
    /// matches.
    pub fn holiday(&self, year: &str, name: &str) -> Result<Holiday> {
        let data = self.store.get(year)?;
        data.find_holiday(name)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("no holiday named {name:?} in {year}")))
    }

    /// All working days of `year`, ascending.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] if `year` is not a four-digit year;
    /// [`Error::NotFound`] if there is no data for it.
    pub fn workdays(&self, year: &str) -> Result<Vec<Date>> {
        parse_year(year)?;
        let data = self.store.get(year)?;
        calculate_workdays(year, &data)
    }
}
