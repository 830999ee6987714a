//! Inclusive date ranges.

use hl_core::errors::{Error, Result};

use crate::date::Date;

/// An inclusive range of dates `[start, end]`, iterated in ascending order.
///
/// An empty range is represented by `start > end`; it is only ever produced
/// by exhausting an iterator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    start: Date,
    end: Date,
    exhausted: bool,
}

impl DateRange {
    /// Create the range `[start, end]`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if `start > end`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        if start > end {
            return Err(Error::invalid_input(format!(
                "range start {start} is after end {end}"
            )));
        }
        Ok(Self {
            start,
            end,
            exhausted: false,
        })
    }

    /// Every date of `year`, January 1 through December 31.
    pub fn year(year: u16) -> Result<Self> {
        DateRange::new(Date::first_of_year(year)?, Date::last_of_year(year)?)
    }

    /// First date of the range.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last date of the range.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Return `true` if `date` lies inside the range.
    pub fn contains(&self, date: Date) -> bool {
        !self.exhausted && self.start <= date && date <= self.end
    }

    /// Number of dates remaining in the range.
    pub fn len(&self) -> usize {
        if self.exhausted {
            0
        } else {
            (self.start.days_between(self.end) + 1) as usize
        }
    }

    /// Return `true` if no dates remain.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.exhausted {
            return None;
        }
        let current = self.start;
        match current.succ() {
            Some(next) if next <= self.end => self.start = next,
            _ => self.exhausted = true,
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateRange {}

impl std::iter::FusedIterator for DateRange {}
