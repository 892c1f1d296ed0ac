//! The fixed-point decimal classifier.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::domain::error::DomainError;
use crate::domain::format::NumberFormat;

/// Anchored shape of a decimal literal: optional sign, ASCII integer digit
/// run, then optionally a single `.`/`,` separator with a fractional digit
/// run. `(?i)` is a no-op safeguard — the pattern has no letters.
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([+-]?)([0-9]+)(?:[.,]([0-9]+))?$").expect("hard-coded pattern compiles")
});

/// Classifies strings against a fixed [`NumberFormat`].
///
/// Holds no mutable state: a validator is a `Copy` value that can be shared
/// freely across threads and reused for any number of checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberValidator {
    format: NumberFormat,
}

impl NumberValidator {
    /// A validator for the given format.
    pub const fn new(format: NumberFormat) -> Self {
        Self { format }
    }

    /// Shorthand for building the format and validator in one step.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`NumberFormat::new`] does.
    pub fn with(precision: i32, scale: i32, only_positive: bool) -> Result<Self, DomainError> {
        Ok(Self::new(NumberFormat::new(precision, scale, only_positive)?))
    }

    /// The format this validator enforces.
    pub const fn format(&self) -> NumberFormat {
        self.format
    }

    /// Whether `value` is a conforming decimal literal under this format.
    ///
    /// All rejection paths answer `false`; this never panics. An absent
    /// value at the caller (`Option::None`) is not a number — map it to
    /// `false` before calling, e.g.
    /// `opt.is_some_and(|v| validator.is_valid_number(v))`.
    pub fn is_valid_number(&self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }

        let Some(caps) = NUMBER_RE.captures(value) else {
            trace!(value, "not a decimal literal");
            return false;
        };

        let sign = caps.get(1).map_or("", |m| m.as_str());
        // Sign counts toward precision, the separator does not.
        let int_len = sign.len() + caps[2].len();
        let frac_len = caps.get(3).map_or(0, |m| m.len());

        if int_len + frac_len > self.format.precision() as usize {
            trace!(value, int_len, frac_len, "exceeds precision");
            return false;
        }
        if frac_len > self.format.scale() as usize {
            trace!(value, frac_len, "exceeds scale");
            return false;
        }
        if self.format.only_positive() && sign == "-" {
            trace!(value, "negative under an only-positive format");
            return false;
        }

        true
    }
}

impl From<NumberFormat> for NumberValidator {
    fn from(format: NumberFormat) -> Self {
        Self::new(format)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
