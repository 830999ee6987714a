//! Swap calendar: weekends, declared holidays and make-up workdays.
//!
//! Public-holiday schedules often move a weekday off and pay it back on a
//! weekend.  A [`SwapCalendar`] records both sides:
//!
//! * holidays remove weekdays from the working set;
//! * make-up workdays put dates back, whether they are weekends or holidays.
//!
//! A make-up workday always wins: a date that is both a holiday and a
//! make-up workday is a working day.

use std::collections::HashSet;

use hl_core::errors::Result;

use crate::calendar::Calendar;
use crate::date::Date;
use crate::date_range::DateRange;

/// A calendar whose holidays and make-up workdays are added at run time.
#[derive(Debug, Clone)]
pub struct SwapCalendar {
    name: String,
    holidays: HashSet<Date>,
    workdays: HashSet<Date>,
}

impl SwapCalendar {
    /// Create a new calendar with the given name, no holidays, and no
    /// make-up workdays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: HashSet::new(),
            workdays: HashSet::new(),
        }
    }

    /// Add every date of the inclusive range `[start, end]` as a holiday.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`](hl_core::Error::InvalidInput) if
    /// `start > end`.
    pub fn add_holiday_range(&mut self, start: Date, end: Date) -> Result<()> {
        self.holidays.extend(DateRange::new(start, end)?);
        Ok(())
    }

    /// Add a make-up workday.
    pub fn add_workday(&mut self, date: Date) {
        self.workdays.insert(date);
    }

    /// Number of distinct holiday dates.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Number of distinct make-up workdays.
    pub fn workday_count(&self) -> usize {
        self.workdays.len()
    }
}

impl Calendar for SwapCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        if self.workdays.contains(&date) {
            return true;
        }
        !self.is_weekend(date) && !self.holidays.contains(&date)
    }
}
