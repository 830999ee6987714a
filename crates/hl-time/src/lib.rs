//! # hl-time
//!
//! Date, weekday, date-range, and workday-calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Inclusive, ascending runs of dates.
pub mod date_range;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use chrono::Weekday;
pub use calendar::Calendar;
pub use calendars::swap_calendar::SwapCalendar;
pub use date::Date;
pub use date_range::DateRange;
