//! The eligibility evaluator: metric computation and threshold checks.

use super::criteria::EligibilityCriteria;
use super::free_float::FreeFloat;
use mataram_data::{DailyBar, MarketSnapshot};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single criterion check.
///
/// `NoData` marks a criterion whose metric could not be computed from the
/// snapshot (no reported market cap, empty history). It never counts as a
/// pass, but lets callers tell "fails the threshold" apart from "data
/// unavailable".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionStatus {
    /// Metric present and at or above the threshold.
    Pass,
    /// Metric present but below the threshold.
    Fail,
    /// Metric could not be computed from the snapshot.
    NoData,
}

impl CriterionStatus {
    /// Whether this criterion counts toward overall eligibility.
    pub const fn passed(self) -> bool {
        matches!(self, Self::Pass)
    }

    fn check(metric: Option<f64>, threshold: f64) -> Self {
        match metric {
            Some(value) if value >= threshold => Self::Pass,
            Some(_) => Self::Fail,
            None => Self::NoData,
        }
    }
}

impl fmt::Display for CriterionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
            Self::NoData => write!(f, "NO DATA"),
        }
    }
}

/// Result of evaluating one security against the inclusion criteria.
///
/// A pure function's output: derived afresh on every evaluation, never
/// mutated afterwards. Metrics the snapshot could not support are `None` and
/// the matching status is [`CriterionStatus::NoData`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Total market capitalization from the snapshot.
    pub total_market_cap: Option<f64>,
    /// Total market cap scaled by the free-float fraction.
    pub free_float_market_cap: Option<f64>,
    /// Sum of volume times close over the trailing history.
    pub annual_turnover: Option<f64>,
    /// Annual traded value ratio: turnover over free-float market cap.
    pub atvr: Option<f64>,
    /// Total market cap criterion.
    pub market_cap: CriterionStatus,
    /// Free-float market cap criterion.
    pub free_float: CriterionStatus,
    /// ATVR (liquidity) criterion.
    pub liquidity: CriterionStatus,
}

impl EvaluationResult {
    /// Whether the security clears all three criteria.
    pub const fn overall_pass(&self) -> bool {
        self.market_cap.passed() && self.free_float.passed() && self.liquidity.passed()
    }
}

/// Checks a market snapshot against the inclusion criteria.
///
/// Stateless and side-effect free: every call is independent, and identical
/// inputs produce identical results.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEvaluator {
    criteria: EligibilityCriteria,
}

impl EligibilityEvaluator {
    /// Create an evaluator with the default methodology thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator with custom thresholds.
    pub const fn with_criteria(criteria: EligibilityCriteria) -> Self {
        Self { criteria }
    }

    /// The active thresholds.
    pub const fn criteria(&self) -> &EligibilityCriteria {
        &self.criteria
    }

    /// Evaluate a security.
    ///
    /// Computes the three metrics and checks each against its threshold:
    /// free-float market cap is `total × pct/100`, annual turnover sums
    /// `volume × close` over the history, and ATVR divides turnover by the
    /// free-float market cap. A zero free-float market cap yields an ATVR of
    /// zero rather than a division fault.
    pub fn evaluate(&self, snapshot: &MarketSnapshot, free_float: FreeFloat) -> EvaluationResult {
        let total_market_cap = snapshot.market_cap;
        let free_float_market_cap = total_market_cap.map(|mc| mc * free_float.fraction());
        let annual_turnover = annual_turnover(&snapshot.history);

        let atvr = match (annual_turnover, free_float_market_cap) {
            (Some(turnover), Some(ffmc)) if ffmc > 0.0 => Some(turnover / ffmc),
            (Some(_), Some(_)) => Some(0.0),
            _ => None,
        };

        EvaluationResult {
            total_market_cap,
            free_float_market_cap,
            annual_turnover,
            atvr,
            market_cap: CriterionStatus::check(total_market_cap, self.criteria.min_total_market_cap),
            free_float: CriterionStatus::check(
                free_float_market_cap,
                self.criteria.min_free_float_market_cap,
            ),
            liquidity: CriterionStatus::check(atvr, self.criteria.min_atvr),
        }
    }
}

/// Annual turnover value: `Σ volume × close` over the history.
///
/// Bars with a non-finite close are skipped. An empty history yields `None`,
/// not zero: no trading data is not the same as a year of zero turnover.
fn annual_turnover(history: &[DailyBar]) -> Option<f64> {
    if history.is_empty() {
        return None;
    }

    Some(
        history
            .iter()
            .filter(|bar| bar.close.is_finite())
            .map(|bar| bar.volume as f64 * bar.close)
            .sum(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn bar(day: u32, close: f64, volume: u64) -> DailyBar {
        DailyBar {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(i64::from(day)),
            close,
            volume,
        }
    }

    /// History of `days` identical bars whose turnover sums to `total`.
    fn history_with_turnover(total: f64, days: u32) -> Vec<DailyBar> {
        let daily = total / f64::from(days);
        (0..days).map(|d| bar(d, daily / 1_000_000.0, 1_000_000)).collect()
    }

    fn snapshot(market_cap: Option<f64>, history: Vec<DailyBar>) -> MarketSnapshot {
        MarketSnapshot {
            symbol: "TEST.JK".to_string(),
            long_name: None,
            currency: None,
            market_cap,
            history,
        }
    }

    fn ff(pct: f64) -> FreeFloat {
        FreeFloat::new(pct).unwrap()
    }

    #[test]
    fn test_free_float_market_cap_formula() {
        let evaluator = EligibilityEvaluator::new();
        let result = evaluator.evaluate(&snapshot(Some(80e12), Vec::new()), ff(37.5));

        assert_relative_eq!(result.free_float_market_cap.unwrap(), 30e12);
        assert!(result.free_float_market_cap.unwrap() <= result.total_market_cap.unwrap());
    }

    #[test]
    fn test_scenario_all_criteria_pass() {
        // mc = 60e12, pct = 50, turnover = 20e12 -> ffmc = 30e12, atvr = 2/3
        let evaluator = EligibilityEvaluator::new();
        let snap = snapshot(Some(60e12), history_with_turnover(20e12, 250));
        let result = evaluator.evaluate(&snap, ff(50.0));

        assert_eq!(result.market_cap, CriterionStatus::Pass);
        assert_eq!(result.free_float, CriterionStatus::Pass);
        assert_eq!(result.liquidity, CriterionStatus::Pass);
        assert_relative_eq!(result.free_float_market_cap.unwrap(), 30e12);
        assert_relative_eq!(result.atvr.unwrap(), 2.0 / 3.0, epsilon = 1e-9);
        assert!(result.overall_pass());
    }

    #[test]
    fn test_scenario_market_cap_below_threshold() {
        // mc = 40e12 fails the 50e12 threshold even with everything else passing
        let evaluator = EligibilityEvaluator::new();
        let snap = snapshot(Some(40e12), history_with_turnover(30e12, 250));
        let result = evaluator.evaluate(&snap, ff(100.0));

        assert_eq!(result.market_cap, CriterionStatus::Fail);
        assert_eq!(result.free_float, CriterionStatus::Pass);
        assert_eq!(result.liquidity, CriterionStatus::Pass);
        assert!(!result.overall_pass());
    }

    #[test]
    fn test_scenario_thin_free_float() {
        // mc = 100e12, pct = 13 -> ffmc = 13e12, below the 25e12 threshold
        let evaluator = EligibilityEvaluator::new();
        let snap = snapshot(Some(100e12), history_with_turnover(1e12, 250));
        let result = evaluator.evaluate(&snap, ff(13.0));

        assert_eq!(result.market_cap, CriterionStatus::Pass);
        assert_eq!(result.free_float, CriterionStatus::Fail);
        assert_relative_eq!(result.free_float_market_cap.unwrap(), 13e12);
        assert!(!result.overall_pass());
    }

    #[rstest]
    #[case(50_000_000_000_000.0, CriterionStatus::Pass)]
    #[case(49_999_999_999_999.0, CriterionStatus::Fail)]
    fn test_market_cap_boundary(#[case] market_cap: f64, #[case] expected: CriterionStatus) {
        let evaluator = EligibilityEvaluator::new();
        let result = evaluator.evaluate(&snapshot(Some(market_cap), Vec::new()), ff(50.0));
        assert_eq!(result.market_cap, expected);
    }

    #[test]
    fn test_empty_history_is_no_data() {
        let evaluator = EligibilityEvaluator::new();
        let result = evaluator.evaluate(&snapshot(Some(60e12), Vec::new()), ff(50.0));

        assert_eq!(result.annual_turnover, None);
        assert_eq!(result.atvr, None);
        assert_eq!(result.liquidity, CriterionStatus::NoData);
        assert!(!result.overall_pass());
    }

    #[test]
    fn test_absent_market_cap_is_no_data() {
        let evaluator = EligibilityEvaluator::new();
        let result = evaluator.evaluate(&snapshot(None, history_with_turnover(5e12, 250)), ff(50.0));

        assert_eq!(result.total_market_cap, None);
        assert_eq!(result.free_float_market_cap, None);
        assert_eq!(result.market_cap, CriterionStatus::NoData);
        assert_eq!(result.free_float, CriterionStatus::NoData);
        // Turnover is computable but the ratio is not
        assert!(result.annual_turnover.is_some());
        assert_eq!(result.liquidity, CriterionStatus::NoData);
        assert!(!result.overall_pass());
    }

    #[test]
    fn test_zero_free_float_avoids_division() {
        let evaluator = EligibilityEvaluator::new();
        let result = evaluator.evaluate(&snapshot(Some(60e12), history_with_turnover(5e12, 250)), ff(0.0));

        assert_eq!(result.free_float_market_cap, Some(0.0));
        assert_eq!(result.atvr, Some(0.0));
        assert_eq!(result.free_float, CriterionStatus::Fail);
        assert_eq!(result.liquidity, CriterionStatus::Fail);
    }

    #[test]
    fn test_non_finite_close_skipped() {
        let evaluator = EligibilityEvaluator::new();
        let history = vec![bar(0, 100.0, 1_000), bar(1, f64::NAN, 9_999), bar(2, 200.0, 500)];
        let result = evaluator.evaluate(&snapshot(Some(60e12), history), ff(50.0));

        assert_relative_eq!(result.annual_turnover.unwrap(), 200_000.0);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let evaluator = EligibilityEvaluator::new();
        let snap = snapshot(Some(60e12), history_with_turnover(20e12, 250));

        let first = evaluator.evaluate(&snap, ff(50.0));
        let second = evaluator.evaluate(&snap, ff(50.0));
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_criteria_respected() {
        let evaluator = EligibilityEvaluator::with_criteria(EligibilityCriteria {
            min_total_market_cap: 1e12,
            min_free_float_market_cap: 5e11,
            min_atvr: 0.01,
        });
        let snap = snapshot(Some(2e12), history_with_turnover(1e11, 250));
        let result = evaluator.evaluate(&snap, ff(60.0));

        assert!(result.overall_pass());
    }
}
