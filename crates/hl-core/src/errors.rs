//! Error types for the holidays service.
//!
//! Every failure a caller can observe is one of two kinds: the requested
//! year or holiday does not exist ([`Error::NotFound`]), or the request
//! itself is malformed ([`Error::InvalidInput`]).  Date arithmetic failures
//! get their own variant so they can be reported precisely.

use thiserror::Error;

/// The top-level error type used throughout the holidays crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// No data for the requested year, or no holiday with the requested name.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request could not be interpreted (e.g. an unparsable year).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Date construction or arithmetic error.
    #[error("date error: {0}")]
    Date(String),
}

impl Error {
    /// Shorthand for [`Error::NotFound`].
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    /// Shorthand for [`Error::InvalidInput`].
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Return `true` for [`Error::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// Shorthand `Result` type used throughout the holidays crates.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidInput(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hl_core::{ensure, errors::Error};
/// fn four_digits(s: &str) -> hl_core::errors::Result<&str> {
///     ensure!(s.len() == 4, "expected four digits, got {s:?}");
///     Ok(s)
/// }
/// assert!(four_digits("2024").is_ok());
/// assert_eq!(
///     four_digits("24"),
///     Err(Error::InvalidInput("expected four digits, got \"24\"".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidInput(
                format!($($msg)*)
            ));
        }
    };
}
