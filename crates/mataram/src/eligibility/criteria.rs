//! Inclusion thresholds for the three eligibility criteria.

use serde::{Deserialize, Serialize};

/// Thresholds a security must clear for index inclusion.
///
/// Defaults carry the published methodology figures: 50 trillion total
/// market cap, 25 trillion free-float market cap, 15% ATVR. Values are
/// currency-agnostic; they are compared against whatever currency the
/// snapshot reports in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityCriteria {
    /// Minimum total market capitalization (default: 50e12)
    pub min_total_market_cap: f64,
    /// Minimum free-float-adjusted market capitalization (default: 25e12)
    pub min_free_float_market_cap: f64,
    /// Minimum annual traded value ratio (default: 0.15)
    pub min_atvr: f64,
}

impl Default for EligibilityCriteria {
    fn default() -> Self {
        Self {
            min_total_market_cap: 50e12,
            min_free_float_market_cap: 25e12,
            min_atvr: 0.15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let criteria = EligibilityCriteria::default();
        assert_eq!(criteria.min_total_market_cap, 50_000_000_000_000.0);
        assert_eq!(criteria.min_free_float_market_cap, 25_000_000_000_000.0);
        assert_eq!(criteria.min_atvr, 0.15);
    }

    #[test]
    fn test_custom_criteria() {
        let criteria = EligibilityCriteria {
            min_total_market_cap: 1e12,
            min_free_float_market_cap: 5e11,
            min_atvr: 0.05,
        };
        assert_eq!(criteria.min_total_market_cap, 1e12);
    }
}
