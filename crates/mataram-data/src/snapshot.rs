//! Per-security market snapshot consumed by the eligibility evaluator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of trading in a security's history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Trading date.
    pub date: NaiveDate,
    /// Closing price.
    pub close: f64,
    /// Traded volume in shares.
    pub volume: u64,
}

/// Market data for a single security at evaluation time.
///
/// Owned by the caller and treated as immutable input. Fields the provider
/// could not supply are `None` (market cap) or empty (history); a partial
/// snapshot is still a valid snapshot, the evaluator decides what an absent
/// value means for each criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Exchange-qualified ticker symbol (e.g. `"BREN.JK"`).
    pub symbol: String,
    /// Display name of the security, when the provider reports one.
    pub long_name: Option<String>,
    /// Quote currency, when the provider reports one.
    pub currency: Option<String>,
    /// Total market capitalization, absent when the provider has no figure.
    pub market_cap: Option<f64>,
    /// Trailing daily history, oldest first. May be empty.
    pub history: Vec<DailyBar>,
}

impl MarketSnapshot {
    /// Name to present to the user, falling back to the raw symbol.
    pub fn display_name(&self) -> &str {
        self.long_name.as_deref().unwrap_or(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(long_name: Option<&str>) -> MarketSnapshot {
        MarketSnapshot {
            symbol: "BREN.JK".to_string(),
            long_name: long_name.map(str::to_string),
            currency: Some("IDR".to_string()),
            market_cap: Some(90.0e12),
            history: Vec::new(),
        }
    }

    #[test]
    fn test_display_name_prefers_long_name() {
        let snap = snapshot(Some("Barito Renewables Energy Tbk."));
        assert_eq!(snap.display_name(), "Barito Renewables Energy Tbk.");
    }

    #[test]
    fn test_display_name_falls_back_to_symbol() {
        let snap = snapshot(None);
        assert_eq!(snap.display_name(), "BREN.JK");
    }

    #[test]
    fn test_snapshot_serde() {
        let snap = MarketSnapshot {
            symbol: "BBCA.JK".to_string(),
            long_name: None,
            currency: None,
            market_cap: None,
            history: vec![DailyBar {
                date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
                close: 9_825.0,
                volume: 41_000_000,
            }],
        };

        let json = serde_json::to_string(&snap).unwrap();
        let back: MarketSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
