//! The [`NumberFormat`] value object and its `N(m,k)` text notation.
//!
//! # Design
//!
//! `NumberFormat` is a pure value type — `Copy`, equality-by-value, no
//! identity. Its invariants (`precision > 0`, `0 <= scale < precision`) are
//! enforced once, in [`NumberFormat::new`], and hold for every value of the
//! type: the `FromStr` parser and the serde deserializer both funnel
//! through the same constructor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── NumberFormat ──────────────────────────────────────────────────────────────

/// A fixed-point decimal format `N(precision,scale)`.
///
/// `precision` is the maximum count of significant characters in a number:
/// an optional sign plus the integer and fractional digit runs, without the
/// separator. `scale` caps the fractional digit run. `only_positive`
/// additionally rejects a leading minus.
///
/// Construction takes signed integers so that out-of-range inputs are
/// representable and rejected; valid values are stored unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawNumberFormat", into = "RawNumberFormat")]
pub struct NumberFormat {
    precision: u32,
    scale: u32,
    only_positive: bool,
}

impl NumberFormat {
    /// Create a format, checking the invariants.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidPrecision`] when `precision <= 0`
    /// - [`DomainError::InvalidScale`] when `scale < 0` or
    ///   `scale >= precision`
    pub fn new(precision: i32, scale: i32, only_positive: bool) -> Result<Self, DomainError> {
        if precision <= 0 {
            return Err(DomainError::InvalidPrecision { precision });
        }
        // NB: strict check behind a "less or equal" message; see DomainError.
        if scale < 0 || scale >= precision {
            return Err(DomainError::InvalidScale { scale, precision });
        }
        Ok(Self {
            precision: precision as u32,
            scale: scale as u32,
            only_positive,
        })
    }

    /// Integer-only format `N(precision)`.
    pub fn integral(precision: i32, only_positive: bool) -> Result<Self, DomainError> {
        Self::new(precision, 0, only_positive)
    }

    /// Maximum significant characters, sign included.
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Maximum fractional digits.
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Whether a leading `-` is rejected.
    pub const fn only_positive(&self) -> bool {
        self.only_positive
    }

    /// The same format with the sign restriction switched on or off.
    pub fn with_only_positive(mut self, only_positive: bool) -> Self {
        self.only_positive = only_positive;
        self
    }
}

impl fmt::Display for NumberFormat {
    /// Canonical notation: `N(5,2)`, with a zero scale omitted as `N(5)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            write!(f, "N({})", self.precision)
        } else {
            write!(f, "N({},{})", self.precision, self.scale)
        }
    }
}

impl FromStr for NumberFormat {
    type Err = DomainError;

    /// Parse the `N(m)` / `N(m,k)` notation, e.g. `N(17,2)`.
    ///
    /// The leading `N` is case-insensitive and surrounding whitespace is
    /// ignored. The notation does not encode the sign restriction;
    /// `only_positive` starts out `false` (see
    /// [`NumberFormat::with_only_positive`]).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || DomainError::InvalidFormatSpec { spec: s.to_owned() };

        let body = s
            .trim()
            .strip_prefix(['N', 'n'])
            .and_then(|rest| rest.strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(bad)?;

        let (precision, scale) = match body.split_once(',') {
            Some((m, k)) => (m, Some(k)),
            None => (body, None),
        };

        let precision: i32 = precision.trim().parse().map_err(|_| bad())?;
        let scale: i32 = match scale {
            Some(k) => k.trim().parse().map_err(|_| bad())?,
            None => 0,
        };

        Self::new(precision, scale, false)
    }
}

// ── serde representation ──────────────────────────────────────────────────────

/// Wire/config shape of a format. Conversion into [`NumberFormat`] re-runs
/// the construction checks, so serde input cannot bypass the invariants.
#[derive(Debug, Serialize, Deserialize)]
struct RawNumberFormat {
    precision: i32,
    #[serde(default)]
    scale: i32,
    #[serde(default)]
    only_positive: bool,
}

impl TryFrom<RawNumberFormat> for NumberFormat {
    type Error = DomainError;

    fn try_from(raw: RawNumberFormat) -> Result<Self, Self::Error> {
        Self::new(raw.precision, raw.scale, raw.only_positive)
    }
}

impl From<NumberFormat> for RawNumberFormat {
    fn from(format: NumberFormat) -> Self {
        Self {
            precision: format.precision as i32,
            scale: format.scale as i32,
            only_positive: format.only_positive,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_negative_precision() {
        assert_eq!(
            NumberFormat::new(0, 0, false),
            Err(DomainError::InvalidPrecision { precision: 0 })
        );
        assert_eq!(
            NumberFormat::new(-1, 2, true),
            Err(DomainError::InvalidPrecision { precision: -1 })
        );
    }

    #[test]
    fn rejects_negative_scale() {
        assert_eq!(
            NumberFormat::new(1, -1, true),
            Err(DomainError::InvalidScale {
                scale: -1,
                precision: 1
            })
        );
    }

    #[test]
    fn rejects_scale_equal_to_precision() {
        // The boundary is strict even though the message says "less or equal".
        assert!(matches!(
            NumberFormat::new(6, 6, true),
            Err(DomainError::InvalidScale { .. })
        ));
    }

    #[test]
    fn rejects_scale_greater_than_precision() {
        assert!(matches!(
            NumberFormat::new(1, 2, true),
            Err(DomainError::InvalidScale { .. })
        ));
    }

    #[test]
    fn accepts_valid_combinations() {
        assert!(NumberFormat::new(1, 0, true).is_ok());
        assert!(NumberFormat::new(10, 9, true).is_ok());
    }

    #[test]
    fn accessors_reflect_construction() {
        let format = NumberFormat::new(5, 2, true).unwrap();
        assert_eq!(format.precision(), 5);
        assert_eq!(format.scale(), 2);
        assert!(format.only_positive());
    }

    #[test]
    fn with_only_positive_flips_only_the_sign_policy() {
        let format = NumberFormat::new(3, 1, false).unwrap();
        let restricted = format.with_only_positive(true);
        assert!(restricted.only_positive());
        assert_eq!(restricted.precision(), format.precision());
        assert_eq!(restricted.scale(), format.scale());
    }

    // ── notation ──────────────────────────────────────────────────────────

    #[test]
    fn parses_full_notation() {
        let format: NumberFormat = "N(5,2)".parse().unwrap();
        assert_eq!(format.precision(), 5);
        assert_eq!(format.scale(), 2);
        assert!(!format.only_positive());
    }

    #[test]
    fn parses_integral_notation() {
        let format: NumberFormat = "N(7)".parse().unwrap();
        assert_eq!(format.precision(), 7);
        assert_eq!(format.scale(), 0);
    }

    #[test]
    fn notation_is_case_insensitive_and_trims() {
        assert!("n(5,2)".parse::<NumberFormat>().is_ok());
        assert!("  N( 5 , 2 )  ".parse::<NumberFormat>().is_ok());
    }

    #[test]
    fn malformed_notation_is_rejected() {
        for spec in ["", "5,2", "N", "N()", "N(a)", "N(5,2,1)", "N(5,", "(5,2)"] {
            assert!(
                matches!(
                    spec.parse::<NumberFormat>(),
                    Err(DomainError::InvalidFormatSpec { .. })
                ),
                "spec {spec:?} should be rejected as malformed"
            );
        }
    }

    #[test]
    fn parsed_values_still_pass_construction_checks() {
        assert!(matches!(
            "N(0)".parse::<NumberFormat>(),
            Err(DomainError::InvalidPrecision { .. })
        ));
        assert!(matches!(
            "N(2,2)".parse::<NumberFormat>(),
            Err(DomainError::InvalidScale { .. })
        ));
    }

    #[test]
    fn display_round_trips_canonically() {
        for spec in ["N(5,2)", "N(7)"] {
            let format: NumberFormat = spec.parse().unwrap();
            assert_eq!(format.to_string(), spec);
            assert_eq!(format.to_string().parse::<NumberFormat>().unwrap(), format);
        }
    }

    // ── serde ─────────────────────────────────────────────────────────────

    #[test]
    fn serde_round_trip() {
        let format = NumberFormat::new(5, 2, true).unwrap();
        let json = serde_json::to_string(&format).unwrap();
        let back: NumberFormat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, format);
    }

    #[test]
    fn serde_defaults_scale_and_sign() {
        let format: NumberFormat = serde_json::from_str(r#"{"precision":4}"#).unwrap();
        assert_eq!(format.scale(), 0);
        assert!(!format.only_positive());
    }

    #[test]
    fn serde_rejects_invalid_pairs() {
        assert!(serde_json::from_str::<NumberFormat>(r#"{"precision":2,"scale":2}"#).is_err());
        assert!(serde_json::from_str::<NumberFormat>(r#"{"precision":0}"#).is_err());
    }
}
