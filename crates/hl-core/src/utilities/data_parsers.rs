//! Data parsing helpers.
//!
//! Year keys and calendar dates arrive as plain strings (URL path segments,
//! JSON fields).  These helpers accept only the strict forms the service
//! works with: a year is exactly four ASCII digits, a date is `YYYY-MM-DD`.

use crate::ensure;
use crate::errors::Result;

/// Smallest year accepted by [`parse_year`].
pub const MIN_YEAR: u16 = 1000;

/// Largest year accepted by [`parse_year`].
pub const MAX_YEAR: u16 = 9999;

/// Return `true` if `s` is exactly four ASCII digits.
///
/// Data sources use this to decide whether a key can name a year at all
/// before touching the filesystem.
pub fn is_year_key(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a four-digit year string such as `"2024"`.
///
/// # Errors
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) if `s` is not
/// four ASCII digits or is below [`MIN_YEAR`].
pub fn parse_year(s: &str) -> Result<u16> {
    ensure!(is_year_key(s), "year must be four digits, got {s:?}");
    let year: u16 = s
        .parse()
        .map_err(|_| crate::Error::invalid_input(format!("year {s:?} is not a number")))?;
    ensure!(
        (MIN_YEAR..=MAX_YEAR).contains(&year),
        "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
    );
    Ok(year)
}

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.  Only the field layout is
/// checked here; calendar validity (e.g. February 30) is left to the caller.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits = |r: std::ops::Range<usize>| bytes[r].iter().all(u8::is_ascii_digit);
    if !(digits(0..4) && digits(5..7) && digits(8..10)) {
        return None;
    }
    let year: u16 = s[0..4].parse().ok()?;
    let month: u8 = s[5..7].parse().ok()?;
    let day: u8 = s[8..10].parse().ok()?;
    Some((year, month, day))
}
