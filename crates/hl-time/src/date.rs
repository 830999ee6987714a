//! `Date` type.
//!
//! A plain calendar date with no time-of-day and no timezone, backed by
//! [`chrono::NaiveDate`].  The textual form everywhere (JSON, URLs,
//! `Display`) is ISO 8601 `YYYY-MM-DD`.
//!
//! The valid range is 1000-01-01 to 9999-12-31, i.e. every date whose year
//! has four digits.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use hl_core::errors::{Error, Result};
use hl_core::utilities::data_parsers::{parse_iso_date, MAX_YEAR, MIN_YEAR};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
            .map(Date)
            .ok_or_else(|| Error::Date(format!("no day {day} in {year}-{month:02}")))
    }

    /// Parse an ISO 8601 `YYYY-MM-DD` string.
    pub fn parse_iso(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s)
            .ok_or_else(|| Error::Date(format!("expected YYYY-MM-DD, got {s:?}")))?;
        Date::from_ymd(y, m, d)
    }

    /// January 1 of `year`.
    pub fn first_of_year(year: u16) -> Result<Self> {
        Date::from_ymd(year, 1, 1)
    }

    /// December 31 of `year`.
    pub fn last_of_year(year: u16) -> Result<Self> {
        Date::from_ymd(year, 12, 31)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year (1000–9999).
    pub fn year(&self) -> u16 {
        // The constructors keep the year in the four-digit range.
        self.0.year() as u16
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.0.month() as u8
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.0.day() as u8
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Return `true` if this date falls on Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add_signed(chrono::Duration::days(i64::from(n)))
            .filter(|d| (i32::from(MIN_YEAR)..=i32::from(MAX_YEAR)).contains(&d.year()))
            .map(Date)
            .ok_or_else(|| Error::Date(format!("date arithmetic: {self} + {n} out of range")))
    }

    /// The following day, or `None` past 9999-12-31.
    pub fn succ(self) -> Option<Self> {
        self.add_days(1).ok()
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0.signed_duration_since(self.0).num_days() as i32
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        rhs.days_between(self)
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Date::parse_iso(s)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day_of_month()
        )
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Date::parse_iso(&s).map_err(de::Error::custom)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1000, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2024, 1, 6),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_out_of_range() {
        assert!(Date::from_ymd(999, 12, 31).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 4, 31).is_err());
        assert!(Date::from_ymd(2023, 4, 0).is_err());
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        let d = Date::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(d.weekday(), Weekday::Mon);
        // 2024-01-06 is a Saturday
        let d2 = Date::from_ymd(2024, 1, 6).unwrap();
        assert_eq!(d2.weekday(), Weekday::Sat);
        assert!(d2.is_weekend());
    }

    #[test]
    fn test_iso_format_and_parse() {
        let d = Date::from_ymd(2024, 3, 5).unwrap();
        assert_eq!(d.to_string(), "2024-03-05");
        assert_eq!(format!("{d:?}"), "Date(2024-03-05)");
        assert_eq!("2024-03-05".parse::<Date>().unwrap(), d);
        assert!("2024-3-5".parse::<Date>().is_err());
        assert!("2023-02-29".parse::<Date>().is_err());
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!(d2.month(), 2);
        assert_eq!(d2.day_of_month(), 1);
        assert_eq!(Date::from_ymd(2023, 2, 1).unwrap() - d, 31);
        assert_eq!(d2 - 31, d);
    }

    #[test]
    fn test_succ_at_boundary() {
        let last = Date::last_of_year(9999).unwrap();
        assert_eq!(last.succ(), None);
        let eoy = Date::last_of_year(2024).unwrap();
        assert_eq!(eoy.succ(), Some(Date::first_of_year(2025).unwrap()));
    }

    #[test]
    fn test_serde_iso_string() {
        let d = Date::from_ymd(2024, 10, 1).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2024-10-01\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<Date>("\"2024-10-32\"").is_err());
        assert!(serde_json::from_str::<Date>("20241001").is_err());
    }
}
