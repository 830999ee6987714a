//! # hl-server
//!
//! HTTP transport for the holidays service.
//!
//! ```text
//! GET /holidays/{year}             all holidays of a year
//! GET /holidays/{festival}/{year}  one holiday, name matched case-insensitively
//! GET /work/{year}                 every working day of a year
//! GET /health                      liveness plus the cached years
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Mapping of service errors to HTTP responses.
pub mod error;

/// Request handlers.
pub mod handlers;

/// Route table.
pub mod router;

/// Shared handler state.
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
