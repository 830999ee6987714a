//! # hl-core
//!
//! Core types, error definitions, and settings for the holidays service.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace – the error taxonomy, the `ensure!` macro, the `Settings`
//! loader, and small string-parsing helpers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Service settings (bind address, data directory, preload list).
pub mod settings;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::Settings;
