//! Workday calculation.
//!
//! The working days of a year are every date from January 1 to December 31
//! that is either
//!
//! * a weekday not covered by any holiday range, or
//! * a make-up workday, whatever else it is.
//!
//! The scan itself is [`Calendar::business_days`] over a
//! [`SwapCalendar`](hl_time::SwapCalendar) built from the year's data.

use hl_core::errors::Result;
use hl_core::utilities::parse_year;
use hl_time::{Calendar, Date, DateRange};
use tracing::debug;

use crate::models::YearData;

/// Every working day of `year`, ascending.
///
/// `data` is used as given; holiday ranges and make-up days that fall outside
/// `year` simply never match.
///
/// # Errors
/// Returns [`Error::InvalidInput`](hl_core::Error::InvalidInput) if `year` is
/// not a four-digit year or a holiday range in `data` is reversed.
pub fn calculate_workdays(year: &str, data: &YearData) -> Result<Vec<Date>> {
    let y = parse_year(year)?;
    let calendar = data.calendar(year)?;
    debug!(
        year,
        holidays = calendar.holiday_count(),
        makeups = calendar.workday_count(),
        "scanning year"
    );
    Ok(calendar.business_days(DateRange::year(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Holiday, Workday};
    use hl_core::Error;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn new_year_with_makeup() -> YearData {
        YearData {
            holidays: vec![Holiday::new("New Year", date(2024, 1, 1), date(2024, 1, 1)).unwrap()],
            work: vec![Workday {
                name: "Makeup".into(),
                date: date(2024, 1, 6),
            }],
        }
    }

    #[test]
    fn new_year_and_saturday_makeup() {
        let days = calculate_workdays("2024", &new_year_with_makeup()).unwrap();
        assert!(!days.contains(&date(2024, 1, 1)));
        assert!(days.contains(&date(2024, 1, 6)));
        assert!(!days.contains(&date(2024, 1, 7)));
        assert_eq!(&days[..5], &[
            date(2024, 1, 2),
            date(2024, 1, 3),
            date(2024, 1, 4),
            date(2024, 1, 5),
            date(2024, 1, 6),
        ]);
        // 262 weekdays, minus New Year, plus the Saturday.
        assert_eq!(days.len(), 262);
    }

    #[test]
    fn empty_data_gives_plain_weekdays() {
        let days = calculate_workdays("2023", &YearData::default()).unwrap();
        assert_eq!(days.len(), 260);
        assert!(days.iter().all(|d| !d.is_weekend()));
        assert_eq!(days.first(), Some(&date(2023, 1, 2)));
        assert_eq!(days.last(), Some(&date(2023, 12, 29)));
    }

    #[test]
    fn makeup_on_holiday_weekday_is_kept() {
        let mut data = new_year_with_makeup();
        data.work.push(Workday {
            name: "Override".into(),
            date: date(2024, 1, 1),
        });
        let days = calculate_workdays("2024", &data).unwrap();
        assert_eq!(days[0], date(2024, 1, 1));
    }

    #[test]
    fn weekend_holiday_with_makeup_is_kept() {
        let data = YearData {
            holidays: vec![Holiday::new("Long", date(2024, 2, 10), date(2024, 2, 17)).unwrap()],
            work: vec![Workday {
                name: "Long".into(),
                date: date(2024, 2, 10),
            }],
        };
        let days = calculate_workdays("2024", &data).unwrap();
        assert!(days.contains(&date(2024, 2, 10)));
        assert!(!days.contains(&date(2024, 2, 11)));
        assert!(!days.contains(&date(2024, 2, 12)));
    }

    #[test]
    fn other_years_data_is_ignored() {
        let data = YearData {
            holidays: vec![Holiday::new("Eve", date(2023, 12, 29), date(2024, 1, 2)).unwrap()],
            work: vec![Workday {
                name: "Next".into(),
                date: date(2025, 1, 4),
            }],
        };
        let days = calculate_workdays("2024", &data).unwrap();
        assert_eq!(days[0], date(2024, 1, 3));
        assert!(days.iter().all(|d| d.year() == 2024));
    }

    #[test]
    fn bad_year_is_invalid_input() {
        for year in ["24", "20x4", "", "0999", "2024 "] {
            assert!(
                matches!(
                    calculate_workdays(year, &YearData::default()),
                    Err(Error::InvalidInput(_))
                ),
                "{year:?} should be rejected"
            );
        }
    }
}
