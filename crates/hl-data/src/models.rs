//! Year-data models.
//!
//! These mirror the on-disk JSON document one-to-one:
//!
//! ```json
//! {
//!   "holidays": [{"name": "National Day", "start": "2024-10-01", "end": "2024-10-07"}],
//!   "work":     [{"name": "National Day", "date": "2024-09-29"}]
//! }
//! ```

use hl_core::errors::{Error, Result};
use hl_time::{Date, DateRange, SwapCalendar};
use serde::{Deserialize, Deserializer, Serialize};
use unicase::UniCase;

/// A named holiday covering the inclusive range `[start, end]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Display name, e.g. `"Spring Festival"`.
    pub name: String,
    /// First day off.
    pub start: Date,
    /// Last day off (inclusive).
    pub end: Date,
}

impl Holiday {
    /// Create a holiday, checking `start <= end`.
    pub fn new(name: impl Into<String>, start: Date, end: Date) -> Result<Self> {
        let holiday = Self {
            name: name.into(),
            start,
            end,
        };
        holiday.dates()?;
        Ok(holiday)
    }

    /// Every date of the holiday, ascending.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if `start > end`.
    pub fn dates(&self) -> Result<DateRange> {
        DateRange::new(self.start, self.end).map_err(|_| {
            Error::invalid_input(format!(
                "holiday {:?} starts {} after it ends {}",
                self.name, self.start, self.end
            ))
        })
    }

    /// Return `true` if `name` equals this holiday's name under Unicode
    /// case folding (so `"ΟΔΟΣ"` matches `"οδος"`).
    pub fn matches_name(&self, name: &str) -> bool {
        UniCase::new(self.name.as_str()) == UniCase::new(name)
    }
}

/// A make-up working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workday {
    /// Name of the holiday this day pays back.
    pub name: String,
    /// The working date.
    pub date: Date,
}

/// Holidays and make-up workdays for one year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearData {
    /// Holidays, in document order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub holidays: Vec<Holiday>,
    /// Make-up workdays, in document order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub work: Vec<Workday>,
}

/// A missing array and an explicit `null` both mean "none".
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl YearData {
    /// Check every holiday range is well ordered.
    pub fn validate(&self) -> Result<()> {
        for holiday in &self.holidays {
            holiday.dates()?;
        }
        Ok(())
    }

    /// First holiday whose name matches `name` case-insensitively.
    pub fn find_holiday(&self, name: &str) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.matches_name(name))
    }

    /// Build a [`SwapCalendar`] holding every holiday date and make-up
    /// workday of this data.
    pub fn calendar(&self, name: impl Into<String>) -> Result<SwapCalendar> {
        let mut cal = SwapCalendar::new(name);
        for holiday in &self.holidays {
            cal.add_holiday_range(holiday.start, holiday.end)?;
        }
        for workday in &self.work {
            cal.add_workday(workday.date);
        }
        Ok(cal)
    }
}
