//! `Calendar` trait.
//!
//! A calendar knows which dates are working days.  Listing the working days
//! of a range is a straight scan over [`DateRange`].

use crate::date::Date;
use crate::date_range::DateRange;

/// A workday calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"2024"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a working day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a weekend according to this calendar.
    ///
    /// Saturday and Sunday are weekends.
    fn is_weekend(&self, date: Date) -> bool {
        date.is_weekend()
    }

    /// Every working day in `range`, ascending.
    fn business_days(&self, range: DateRange) -> Vec<Date> {
        range.filter(|&d| self.is_business_day(d)).collect()
    }
}
