//! Report generation for eligibility evaluations.

use crate::eligibility::{CriterionStatus, EligibilityCriteria, EvaluationResult, FreeFloat};
use chrono::{DateTime, Utc};
use mataram_data::MarketSnapshot;
use serde::Serialize;
use std::fmt::Write as _;
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One evaluation of one security, ready for presentation.
#[derive(Debug, Clone, Serialize)]
pub struct EligibilityReport {
    /// Ticker symbol the evaluation ran against.
    pub symbol: String,
    /// Display name of the security, when known.
    pub display_name: Option<String>,
    /// Quote currency, when known.
    pub currency: Option<String>,
    /// Report generation timestamp.
    pub evaluated_at: DateTime<Utc>,
    /// Free-float percentage the user supplied.
    pub free_float_pct: f64,
    /// Thresholds the evaluation used.
    pub criteria: EligibilityCriteria,
    /// Computed metrics and per-criterion statuses.
    pub result: EvaluationResult,
}

impl EligibilityReport {
    /// Build a report from a snapshot and its evaluation.
    pub fn new(
        snapshot: &MarketSnapshot,
        free_float: FreeFloat,
        criteria: EligibilityCriteria,
        result: EvaluationResult,
    ) -> Self {
        Self {
            symbol: snapshot.symbol.clone(),
            display_name: snapshot.long_name.clone(),
            currency: snapshot.currency.clone(),
            evaluated_at: Utc::now(),
            free_float_pct: free_float.pct(),
            criteria,
            result,
        }
    }

    /// Name to show in headers, falling back to the raw symbol.
    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.symbol)
    }

    /// Convert the report to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the report as a fixed-width text block for terminal output.
    pub fn to_ascii_table(&self) -> String {
        let mut out = String::new();
        let rule = "─".repeat(66);

        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "INDEX ELIGIBILITY: {} ({})", self.title(), self.symbol);
        let _ = writeln!(
            out,
            "Free float: {:.1}% of shares held by the public",
            self.free_float_pct
        );
        let _ = writeln!(out, "{rule}");

        let _ = writeln!(
            out,
            "  {:<24} {:>10}   (min {:>8})   {}",
            "Total market cap",
            trillions(self.result.total_market_cap),
            trillions(Some(self.criteria.min_total_market_cap)),
            status_mark(self.result.market_cap),
        );
        let _ = writeln!(
            out,
            "  {:<24} {:>10}   (min {:>8})   {}",
            "Free-float market cap",
            trillions(self.result.free_float_market_cap),
            trillions(Some(self.criteria.min_free_float_market_cap)),
            status_mark(self.result.free_float),
        );
        let _ = writeln!(
            out,
            "  {:<24} {:>10}   (min {:>8})   {}",
            "ATVR (liquidity)",
            percent(self.result.atvr),
            percent(Some(self.criteria.min_atvr)),
            status_mark(self.result.liquidity),
        );

        let _ = writeln!(out, "{rule}");
        let verdict = if self.result.overall_pass() {
            "ELIGIBLE: all three inclusion criteria are met"
        } else {
            "NOT ELIGIBLE: at least one inclusion criterion is not met"
        };
        let _ = writeln!(out, "  VERDICT: {verdict}");
        let _ = writeln!(
            out,
            "  Note: final inclusion additionally ranks all securities on the"
        );
        let _ = writeln!(out, "  exchange; this check covers the numeric thresholds only.");
        let _ = writeln!(out, "{rule}");

        out
    }
}

/// Format a monetary amount in trillions, `n/a` when absent.
fn trillions(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.2} T", v / 1e12))
}

/// Format a ratio as a percentage, `n/a` when absent.
fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.2} %", v * 100.0))
}

fn status_mark(status: CriterionStatus) -> String {
    match status {
        CriterionStatus::Pass => format!("✓ {status}"),
        CriterionStatus::Fail => format!("✗ {status}"),
        CriterionStatus::NoData => format!("? {status}"),
    }
}
