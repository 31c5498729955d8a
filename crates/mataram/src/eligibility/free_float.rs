//! Validated free-float percentage input.

use super::EligibilityError;
use serde::Serialize;

/// Proportion of shares held by the general public, as a percentage.
///
/// Supplied by the user from exchange ownership data; the data provider does
/// not report it. Construction enforces the [0, 100] range, so an
/// `EligibilityEvaluator` never sees an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FreeFloat(f64);

impl FreeFloat {
    /// Illustrative default percentage used by the CLI.
    pub const DEFAULT_PCT: f64 = 13.0;

    /// Create a free-float percentage, rejecting values outside [0, 100].
    pub fn new(pct: f64) -> Result<Self, EligibilityError> {
        if pct.is_finite() && (0.0..=100.0).contains(&pct) {
            Ok(Self(pct))
        } else {
            Err(EligibilityError::FreeFloatOutOfRange(pct))
        }
    }

    /// The percentage value in [0, 100].
    pub const fn pct(self) -> f64 {
        self.0
    }

    /// The percentage as a fraction in [0, 1].
    pub const fn fraction(self) -> f64 {
        self.0 / 100.0
    }
}
