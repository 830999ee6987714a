//! Concrete calendar implementations.

/// Calendar built from holiday ranges and make-up workdays.
pub mod swap_calendar;
