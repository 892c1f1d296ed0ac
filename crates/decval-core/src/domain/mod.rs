//! Core domain layer for Decval.
//!
//! Pure business logic with no I/O: the [`NumberFormat`] value object, the
//! [`NumberValidator`] classifier, and the domain error type.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable values**: formats and validators never change after
//!   construction

pub mod error;
pub mod format;
pub mod validator;

// Re-exports for convenience
pub use error::DomainError;
pub use format::NumberFormat;
pub use validator::NumberValidator;
