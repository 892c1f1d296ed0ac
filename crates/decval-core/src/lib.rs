//! Decval Core - fixed-point decimal format validation.
//!
//! This crate provides the domain layer for the `decval` tool: a validator
//! that classifies strings against a fixed-point decimal format
//! `N(precision,scale)` with an optional sign restriction.
//!
//! ## Format notation
//!
//! A format `N(m,k)` accepts a decimal literal when `m` covers every
//! significant character (an optional `+`/`-` sign plus all digits, without
//! the separator) and `k` covers the fractional digit run. An integer
//! format is written `N(m)`. Both `.` and `,` are accepted as the
//! separator.
//!
//! ## Usage
//!
//! ```
//! use decval_core::prelude::*;
//!
//! let format: NumberFormat = "N(5,2)".parse()?;
//! let validator = NumberValidator::new(format);
//!
//! assert!(validator.is_valid_number("123.45"));
//! assert!(validator.is_valid_number("-12,3"));
//! assert!(!validator.is_valid_number("1234.56"));
//! # Ok::<(), DomainError>(())
//! ```
//!
//! The domain layer is pure and synchronous: no I/O, no mutable state after
//! construction. Validators are `Copy` and safe to share across threads.

// Domain layer (stable, well-defined API)
pub mod domain;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::domain::{DomainError, NumberFormat, NumberValidator};
}

pub use domain::{DomainError, NumberFormat, NumberValidator};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
