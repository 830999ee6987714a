//! Integration tests for the `Calendar` trait and `SwapCalendar`.

use std::collections::HashSet;

use hl_time::{Calendar, Date, DateRange, SwapCalendar};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Collect the non-working weekdays in the inclusive range `[from, to]`.
fn holiday_list(cal: &dyn Calendar, from: Date, to: Date) -> Vec<Date> {
    DateRange::new(from, to)
        .unwrap()
        .filter(|&d| !cal.is_business_day(d) && !cal.is_weekend(d))
        .collect()
}

/// The 2024 mainland China public-holiday schedule.
fn china_2024() -> SwapCalendar {
    let mut cal = SwapCalendar::new("2024");
    let ranges = [
        ((1, 1), (1, 1)),
        ((2, 10), (2, 17)),
        ((4, 4), (4, 6)),
        ((5, 1), (5, 5)),
        ((6, 10), (6, 10)),
        ((9, 15), (9, 17)),
        ((10, 1), (10, 7)),
    ];
    for ((sm, sd), (em, ed)) in ranges {
        cal.add_holiday_range(date(2024, sm, sd), date(2024, em, ed))
            .unwrap();
    }
    for (m, d) in [(2, 4), (2, 18), (4, 7), (4, 28), (5, 11), (9, 14), (9, 29), (10, 12)] {
        cal.add_workday(date(2024, m, d));
    }
    cal
}

// ─── SwapCalendar ─────────────────────────────────────────────────────────────

#[test]
fn empty_swap_calendar_has_no_weekday_holidays() {
    let cal = SwapCalendar::new("empty");
    assert!(holiday_list(&cal, date(2024, 1, 1), date(2024, 12, 31)).is_empty());
}

#[test]
fn china_2024_weekday_holidays() {
    let cal = china_2024();
    let expected: Vec<Date> = [
        (1, 1),
        (2, 12),
        (2, 13),
        (2, 14),
        (2, 15),
        (2, 16),
        (4, 4),
        (4, 5),
        (5, 1),
        (5, 2),
        (5, 3),
        (6, 10),
        (9, 16),
        (9, 17),
        (10, 1),
        (10, 2),
        (10, 3),
        (10, 4),
        (10, 7),
    ]
    .iter()
    .map(|&(m, d)| date(2024, m, d))
    .collect();
    assert_eq!(holiday_list(&cal, date(2024, 1, 1), date(2024, 12, 31)), expected);
}

#[test]
fn china_2024_workday_count() {
    let cal = china_2024();
    let days = cal.business_days(DateRange::year(2024).unwrap());
    assert_eq!(days.len(), 251);
    assert!(days.contains(&date(2024, 2, 4))); // Sunday make-up
    assert!(days.contains(&date(2024, 10, 12))); // Saturday make-up
    assert!(!days.contains(&date(2024, 10, 7))); // Monday inside National Day
}

// ─── Properties ───────────────────────────────────────────────────────────────

fn day_of_2024() -> impl Strategy<Value = Date> {
    (0i32..366).prop_map(|n| date(2024, 1, 1) + n)
}

proptest! {
    #[test]
    fn swap_rules_hold(
        holidays in proptest::collection::vec(day_of_2024(), 0..40),
        makeups in proptest::collection::vec(day_of_2024(), 0..20),
    ) {
        let mut cal = SwapCalendar::new("prop");
        holidays.iter().for_each(|&d| cal.add_holiday_range(d, d).unwrap());
        makeups.iter().for_each(|&d| cal.add_workday(d));

        let holiday_set: HashSet<Date> = holidays.into_iter().collect();
        let makeup_set: HashSet<Date> = makeups.into_iter().collect();

        for d in DateRange::year(2024).unwrap() {
            let expected = if d.is_weekend() {
                makeup_set.contains(&d)
            } else {
                !holiday_set.contains(&d) || makeup_set.contains(&d)
            };
            prop_assert_eq!(cal.is_business_day(d), expected, "{}", d);
        }
    }
}
